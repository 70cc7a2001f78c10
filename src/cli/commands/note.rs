use crate::cli::api_client::ApiClient;
use crate::cli::commands::{clear, send_for_message};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
}

#[derive(Tabled)]
pub(crate) struct NoteDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Note")]
    pub(crate) content: String,
}

impl From<&Note> for NoteDisplay {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            content: truncate_with_ellipsis(&note.content, 80),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NoteListResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    notes: Vec<Note>,
}

async fn fetch_listing(api_client: &ApiClient) -> CliResult<NoteListResponse> {
    let response = api_client.get("/notes").send().await?;
    ApiClient::handle_response(response).await
}

pub async fn fetch_notes(api_client: &ApiClient) -> CliResult<Vec<Note>> {
    Ok(fetch_listing(api_client).await?.notes)
}

/// List all notes
pub async fn list_notes(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let listing = fetch_listing(api_client).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&listing.notes)?),
        _ => match listing.message {
            Some(message) if listing.notes.is_empty() => Ok(message),
            _ => Ok(format_table(&listing.notes)),
        },
    }
}

pub(crate) fn format_table(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let display_notes: Vec<NoteDisplay> = notes.iter().map(|n| n.into()).collect();
    let mut table = Table::new(display_notes);
    apply_table_style(&mut table);
    table.to_string()
}

pub async fn add_note(api_client: &ApiClient, content: &str) -> CliResult<String> {
    send_for_message(api_client.post("/notes").json(&json!({ "content": content }))).await
}

pub async fn edit_note(api_client: &ApiClient, id: i64, content: &str) -> CliResult<String> {
    send_for_message(
        api_client
            .put(&format!("/notes/{}", id))
            .json(&json!({ "content": content })),
    )
    .await
}

pub async fn delete_note(api_client: &ApiClient, id: i64) -> CliResult<String> {
    send_for_message(api_client.delete(&format!("/notes/{}", id))).await
}

/// Delete every note (requires --force flag for safety)
pub async fn clear_notes(api_client: &ApiClient, force: bool) -> CliResult<String> {
    clear(api_client, "/notes/clear_all", "clear all notes", force).await
}
