//! Task management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{MessageResponse, or_logged};
use crate::api::AppState;
use crate::db::{Database, Task, TaskInput, TaskRepository};
use crate::weather::WeatherApi;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Renew passport")]
    pub title: String,
    #[schema(example = "Bring two photos")]
    pub description: String,
    #[schema(example = "2025-04-30")]
    pub due_date: String,
    #[schema(example = 2)]
    pub priority: i64,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            due_date: t.due_date,
            priority: t.priority,
        }
    }
}

/// Body of POST /tasks and PUT /tasks/{id}.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskRequest {
    #[schema(example = "Renew passport")]
    pub title: String,
    #[schema(example = "Bring two photos")]
    pub description: String,
    /// YYYY-MM-DD, not validated
    #[schema(example = "2025-04-30")]
    pub due_date: String,
    /// 1 (highest) to 5, not enforced. `"2"` and `2.0` are accepted.
    #[schema(example = 2)]
    #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
    pub priority: i64,
}

impl From<TaskRequest> for TaskInput {
    fn from(r: TaskRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            due_date: r.due_date,
            priority: r.priority,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskList {
    pub tasks: Vec<TaskResponse>,
}

/// Either the tasks or, when there are none, a message.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum TasksResponse {
    Tasks(TaskList),
    Empty(MessageResponse),
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Task added", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Json(req): Json<TaskRequest>,
) -> Json<MessageResponse> {
    or_logged(
        state.db().tasks().create(&TaskInput::from(req)).await,
        "create task",
    );
    Json(MessageResponse::new("Task added"))
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks, or a message when there are none", body = TasksResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<TasksResponse> {
    let tasks = or_logged(state.db().tasks().list().await, "list tasks");

    if tasks.is_empty() {
        return Json(TasksResponse::Empty(MessageResponse::new("No tasks found.")));
    }

    Json(TasksResponse::Tasks(TaskList {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

/// Replaces every field. An unknown id is accepted and changes nothing.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Task updated", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
    Json(req): Json<TaskRequest>,
) -> Json<MessageResponse> {
    or_logged(
        state.db().tasks().update(id, &TaskInput::from(req)).await,
        "update task",
    );
    Json(MessageResponse::new("Task updated"))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    or_logged(state.db().tasks().delete(id).await, "delete task");
    Json(MessageResponse::new("Task deleted"))
}

#[utoipa::path(
    delete,
    path = "/tasks/clear_all",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks cleared", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn clear_tasks<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<MessageResponse> {
    or_logged(state.db().tasks().delete_all().await, "clear tasks");
    Json(MessageResponse::new("All tasks cleared."))
}
