use crate::cli::api_client::ApiClient;
use crate::cli::commands::{clear, send_for_message};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ReminderRequest {
    pub content: String,
    pub date: String,
}

#[derive(Tabled)]
pub(crate) struct ReminderDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Date")]
    pub(crate) date: String,
    #[tabled(rename = "Reminder")]
    pub(crate) content: String,
}

impl From<&Reminder> for ReminderDisplay {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id,
            date: reminder.date.clone(),
            content: truncate_with_ellipsis(&reminder.content, 60),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReminderListResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reminders: Vec<Reminder>,
}

#[derive(Debug, Deserialize)]
struct TodayListResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    today_reminders: Vec<Reminder>,
}

async fn fetch_listing(api_client: &ApiClient) -> CliResult<ReminderListResponse> {
    let response = api_client.get("/reminders").send().await?;
    ApiClient::handle_response(response).await
}

pub async fn fetch_reminders(api_client: &ApiClient) -> CliResult<Vec<Reminder>> {
    Ok(fetch_listing(api_client).await?.reminders)
}

/// List all reminders, soonest first
pub async fn list_reminders(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let listing = fetch_listing(api_client).await?;
    render(listing.message, &listing.reminders, format, "No reminders found.")
}

/// List reminders dated today (server's local date)
pub async fn todays_reminders(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/reminders/today").send().await?;
    let listing: TodayListResponse = ApiClient::handle_response(response).await?;
    render(
        listing.message,
        &listing.today_reminders,
        format,
        "No reminders for today.",
    )
}

fn render(
    message: Option<String>,
    reminders: &[Reminder],
    format: &str,
    empty: &str,
) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(reminders)?),
        _ if reminders.is_empty() => Ok(message.unwrap_or_else(|| empty.to_string())),
        _ => Ok(format_table(reminders)),
    }
}

pub(crate) fn format_table(reminders: &[Reminder]) -> String {
    let display: Vec<ReminderDisplay> = reminders.iter().map(|r| r.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

pub async fn add_reminder(api_client: &ApiClient, request: &ReminderRequest) -> CliResult<String> {
    send_for_message(api_client.post("/reminders").json(request)).await
}

pub async fn edit_reminder(
    api_client: &ApiClient,
    id: i64,
    request: &ReminderRequest,
) -> CliResult<String> {
    send_for_message(api_client.put(&format!("/reminders/{}", id)).json(request)).await
}

pub async fn delete_reminder(api_client: &ApiClient, id: i64) -> CliResult<String> {
    send_for_message(api_client.delete(&format!("/reminders/{}", id))).await
}

/// Delete every reminder (requires --force flag for safety)
pub async fn clear_reminders(api_client: &ApiClient, force: bool) -> CliResult<String> {
    clear(api_client, "/reminders/clear_all", "clear all reminders", force).await
}
