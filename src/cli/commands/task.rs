use crate::cli::api_client::ApiClient;
use crate::cli::commands::{clear, send_for_message};
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: i64,
}

#[derive(Debug, Serialize)]
pub struct TaskRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: i64,
}

#[derive(Tabled)]
pub(crate) struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Description")]
    pub(crate) description: String,
    #[tabled(rename = "Due")]
    pub(crate) due_date: String,
    #[tabled(rename = "Priority")]
    pub(crate) priority: i64,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: truncate_with_ellipsis(&task.title, 40),
            description: truncate_with_ellipsis(&task.description, 50),
            due_date: task.due_date.clone(),
            priority: task.priority,
        }
    }
}

/// Either `{"tasks": [...]}` or `{"message": "No tasks found."}`.
#[derive(Debug, Deserialize)]
struct TaskListResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    tasks: Vec<Task>,
}

async fn fetch_listing(api_client: &ApiClient) -> CliResult<TaskListResponse> {
    let response = api_client.get("/tasks").send().await?;
    ApiClient::handle_response(response).await
}

/// Fetch every task. The empty-listing message maps to an empty vec.
pub async fn fetch_tasks(api_client: &ApiClient) -> CliResult<Vec<Task>> {
    Ok(fetch_listing(api_client).await?.tasks)
}

/// List all tasks
pub async fn list_tasks(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let listing = fetch_listing(api_client).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&listing.tasks)?),
        _ => match listing.message {
            Some(message) if listing.tasks.is_empty() => Ok(message),
            _ => Ok(format_table(&listing.tasks)),
        },
    }
}

pub(crate) fn format_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let display_tasks: Vec<TaskDisplay> = tasks.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display_tasks);
    apply_table_style(&mut table);
    table.to_string()
}

/// Create a new task
pub async fn add_task(api_client: &ApiClient, request: &TaskRequest) -> CliResult<String> {
    send_for_message(api_client.post("/tasks").json(request)).await
}

/// Replace every field of a task
pub async fn edit_task(api_client: &ApiClient, id: i64, request: &TaskRequest) -> CliResult<String> {
    send_for_message(api_client.put(&format!("/tasks/{}", id)).json(request)).await
}

pub async fn delete_task(api_client: &ApiClient, id: i64) -> CliResult<String> {
    send_for_message(api_client.delete(&format!("/tasks/{}", id))).await
}

/// Delete every task (requires --force flag for safety)
pub async fn clear_tasks(api_client: &ApiClient, force: bool) -> CliResult<String> {
    clear(api_client, "/tasks/clear_all", "clear all tasks", force).await
}
