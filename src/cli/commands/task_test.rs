use crate::cli::commands::task::*;
use crate::cli::error::CliError;

use super::test_support::test_client;

fn request(title: &str, priority: i64) -> TaskRequest {
    TaskRequest {
        title: title.to_string(),
        description: format!("{} details", title),
        due_date: "2025-04-30".to_string(),
        priority,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tasks_empty_prints_server_message() {
    let (api_client, _handle) = test_client().await;

    let output = list_tasks(&api_client, "table").await.unwrap();
    assert_eq!(output, "No tasks found.");

    let output = list_tasks(&api_client, "json").await.unwrap();
    assert_eq!(output.trim(), "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_and_list_tasks_integration() {
    let (api_client, _handle) = test_client().await;

    let output = add_task(&api_client, &request("Renew passport", 2))
        .await
        .unwrap();
    assert_eq!(output, "Task added");
    add_task(&api_client, &request("File taxes", 1)).await.unwrap();

    let table = list_tasks(&api_client, "table").await.unwrap();
    assert!(table.contains("Renew passport"));
    assert!(table.contains("File taxes"));
    assert!(table.contains("Priority"));

    let json = list_tasks(&api_client, "json").await.unwrap();
    let tasks: Vec<Task> = serde_json::from_str(&json).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Renew passport");
    assert_eq!(tasks[0].due_date, "2025-04-30");
    assert_eq!(tasks[1].priority, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_edit_and_delete_task_integration() {
    let (api_client, _handle) = test_client().await;

    add_task(&api_client, &request("draft", 3)).await.unwrap();
    let id = fetch_tasks(&api_client).await.unwrap()[0].id;

    let output = edit_task(&api_client, id, &request("final", 1))
        .await
        .unwrap();
    assert_eq!(output, "Task updated");

    let tasks = fetch_tasks(&api_client).await.unwrap();
    assert_eq!(tasks[0].title, "final");
    assert_eq!(tasks[0].priority, 1);

    let output = delete_task(&api_client, id).await.unwrap();
    assert_eq!(output, "Task deleted");
    assert!(fetch_tasks(&api_client).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clear_tasks_requires_force() {
    let (api_client, _handle) = test_client().await;

    add_task(&api_client, &request("keep me", 1)).await.unwrap();

    let err = clear_tasks(&api_client, false).await.unwrap_err();
    assert!(matches!(err, CliError::ForceRequired { .. }));
    assert_eq!(fetch_tasks(&api_client).await.unwrap().len(), 1);

    let output = clear_tasks(&api_client, true).await.unwrap();
    assert_eq!(output, "All tasks cleared.");
    assert!(fetch_tasks(&api_client).await.unwrap().is_empty());
}

#[test]
fn test_format_table_truncates_long_titles() {
    let tasks = vec![Task {
        id: 1,
        title: "x".repeat(100),
        description: String::new(),
        due_date: "2025-01-01".to_string(),
        priority: 5,
    }];

    let table = format_table(&tasks);
    assert!(table.contains("..."));
    assert!(!table.contains(&"x".repeat(41)));
}
