//! Note management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{MessageResponse, or_logged};
use crate::api::AppState;
use crate::db::{Database, Note, NoteRepository};
use crate::weather::WeatherApi;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Wi-Fi password is on the fridge")]
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            content: n.content,
        }
    }
}

/// Body of POST /notes and PUT /notes/{id}.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteRequest {
    #[schema(example = "Wi-Fi password is on the fridge")]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteList {
    pub notes: Vec<NoteResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum NotesResponse {
    Notes(NoteList),
    Empty(MessageResponse),
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/notes",
    tag = "notes",
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note added", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Json(req): Json<NoteRequest>,
) -> Json<MessageResponse> {
    or_logged(state.db().notes().create(&req.content).await, "create note");
    Json(MessageResponse::new("Note added"))
}

#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes, or a message when there are none", body = NotesResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<NotesResponse> {
    let notes = or_logged(state.db().notes().list().await, "list notes");

    if notes.is_empty() {
        return Json(NotesResponse::Empty(MessageResponse::new("No notes found.")));
    }

    Json(NotesResponse::Notes(NoteList {
        notes: notes.into_iter().map(NoteResponse::from).collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note ID")),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note updated", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_note<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
    Json(req): Json<NoteRequest>,
) -> Json<MessageResponse> {
    or_logged(
        state.db().notes().update(id, &req.content).await,
        "update note",
    );
    Json(MessageResponse::new("Note updated"))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    or_logged(state.db().notes().delete(id).await, "delete note");
    Json(MessageResponse::new("Note deleted"))
}

#[utoipa::path(
    delete,
    path = "/notes/clear_all",
    tag = "notes",
    responses(
        (status = 200, description = "All notes cleared", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn clear_notes<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<MessageResponse> {
    or_logged(state.db().notes().delete_all().await, "clear notes");
    Json(MessageResponse::new("All notes cleared."))
}
