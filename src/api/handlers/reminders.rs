//! Reminder management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{MessageResponse, or_logged};
use crate::api::AppState;
use crate::db::{Database, Reminder, ReminderInput, ReminderRepository};
use crate::weather::WeatherApi;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReminderResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Water the plants")]
    pub content: String,
    #[schema(example = "2025-05-01")]
    pub date: String,
}

impl From<Reminder> for ReminderResponse {
    fn from(r: Reminder) -> Self {
        Self {
            id: r.id,
            content: r.content,
            date: r.date,
        }
    }
}

/// Body of POST /reminders and PUT /reminders/{id}.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReminderRequest {
    #[schema(example = "Water the plants")]
    pub content: String,
    /// YYYY-MM-DD, not validated
    #[schema(example = "2025-05-01")]
    pub date: String,
}

impl From<ReminderRequest> for ReminderInput {
    fn from(r: ReminderRequest) -> Self {
        Self {
            content: r.content,
            date: r.date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReminderList {
    pub reminders: Vec<ReminderResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RemindersResponse {
    Reminders(ReminderList),
    Empty(MessageResponse),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TodayReminderList {
    pub today_reminders: Vec<ReminderResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum TodayRemindersResponse {
    Reminders(TodayReminderList),
    Empty(MessageResponse),
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/reminders",
    tag = "reminders",
    request_body = ReminderRequest,
    responses(
        (status = 200, description = "Reminder added", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_reminder<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Json(req): Json<ReminderRequest>,
) -> Json<MessageResponse> {
    or_logged(
        state
            .db()
            .reminders()
            .create(&ReminderInput::from(req))
            .await,
        "create reminder",
    );
    Json(MessageResponse::new("Reminder added"))
}

#[utoipa::path(
    get,
    path = "/reminders",
    tag = "reminders",
    responses(
        (status = 200, description = "All reminders by date, or a message when there are none", body = RemindersResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_reminders<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<RemindersResponse> {
    let reminders = or_logged(state.db().reminders().list().await, "list reminders");

    if reminders.is_empty() {
        return Json(RemindersResponse::Empty(MessageResponse::new(
            "No reminders found.",
        )));
    }

    Json(RemindersResponse::Reminders(ReminderList {
        reminders: reminders.into_iter().map(ReminderResponse::from).collect(),
    }))
}

/// Reminders dated today in the server's local time zone.
#[utoipa::path(
    get,
    path = "/reminders/today",
    tag = "reminders",
    responses(
        (status = 200, description = "Today's reminders, or a message when there are none", body = TodayRemindersResponse)
    )
)]
#[instrument(skip(state))]
pub async fn todays_reminders<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<TodayRemindersResponse> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    debug!(%today, "Looking up today's reminders");

    let reminders = or_logged(
        state.db().reminders().list_for_date(&today).await,
        "list today's reminders",
    );

    if reminders.is_empty() {
        return Json(TodayRemindersResponse::Empty(MessageResponse::new(
            "No reminders for today.",
        )));
    }

    Json(TodayRemindersResponse::Reminders(TodayReminderList {
        today_reminders: reminders.into_iter().map(ReminderResponse::from).collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/reminders/{id}",
    tag = "reminders",
    params(("id" = i64, Path, description = "Reminder ID")),
    request_body = ReminderRequest,
    responses(
        (status = 200, description = "Reminder updated", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_reminder<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
    Json(req): Json<ReminderRequest>,
) -> Json<MessageResponse> {
    or_logged(
        state
            .db()
            .reminders()
            .update(id, &ReminderInput::from(req))
            .await,
        "update reminder",
    );
    Json(MessageResponse::new("Reminder updated"))
}

#[utoipa::path(
    delete,
    path = "/reminders/{id}",
    tag = "reminders",
    params(("id" = i64, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder deleted", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_reminder<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    or_logged(state.db().reminders().delete(id).await, "delete reminder");
    Json(MessageResponse::new("Reminder deleted"))
}

#[utoipa::path(
    delete,
    path = "/reminders/clear_all",
    tag = "reminders",
    responses(
        (status = 200, description = "All reminders cleared", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn clear_reminders<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<MessageResponse> {
    or_logged(state.db().reminders().delete_all().await, "clear reminders");
    Json(MessageResponse::new("All reminders cleared."))
}
