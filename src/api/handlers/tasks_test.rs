//! Integration tests for Task API endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use super::test_support::{send, send_raw, test_app, test_app_without_schema};

fn task_body(title: &str, priority: i64) -> Value {
    json!({
        "title": title,
        "description": format!("{} details", title),
        "due_date": "2025-04-30",
        "priority": priority
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_empty_returns_message() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No tasks found."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_round_trips_all_fields() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/tasks", Some(task_body("Renew passport", 2))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task added"}));

    let (status, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("message").is_none());

    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0]["id"].as_i64().is_some());
    assert_eq!(tasks[0]["title"], "Renew passport");
    assert_eq!(tasks[0]["description"], "Renew passport details");
    assert_eq!(tasks[0]["due_date"], "2025-04-30");
    assert_eq!(tasks[0]["priority"], 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_task_replaces_fields() {
    let app = test_app().await;

    send(&app, "POST", "/tasks", Some(task_body("draft", 3))).await;
    let (_, body) = send(&app, "GET", "/tasks", None).await;
    let id = body["tasks"][0]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/tasks/{}", id),
        Some(json!({
            "title": "final",
            "description": "done",
            "due_date": "2025-05-01",
            "priority": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task updated"}));

    let (_, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(
        body["tasks"][0],
        json!({
            "id": id,
            "title": "final",
            "description": "done",
            "due_date": "2025-05-01",
            "priority": 1
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_success() {
    let app = test_app().await;

    let (status, body) = send(&app, "PUT", "/tasks/9999", Some(task_body("ghost", 1))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task updated"}));

    // Nothing was created as a side effect
    let (_, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(body, json!({"message": "No tasks found."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_task_and_missing_id() {
    let app = test_app().await;

    send(&app, "POST", "/tasks", Some(task_body("a", 1))).await;
    send(&app, "POST", "/tasks", Some(task_body("b", 1))).await;
    let (_, body) = send(&app, "GET", "/tasks", None).await;
    let first = body["tasks"][0]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/tasks/{}", first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));

    let (status, body) = send(&app, "DELETE", "/tasks/424242", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));

    let (_, body) = send(&app, "GET", "/tasks", None).await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "b");
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_all_tasks_twice() {
    let app = test_app().await;

    send(&app, "POST", "/tasks", Some(task_body("a", 1))).await;
    send(&app, "POST", "/tasks", Some(task_body("b", 2))).await;

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/tasks/clear_all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "All tasks cleared."}));

        let (_, body) = send(&app, "GET", "/tasks", None).await;
        assert_eq!(body, json!({"message": "No tasks found."}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_bodies_are_rejected() {
    let app = test_app().await;

    // Missing fields
    let status = send_raw(&app, "POST", "/tasks", r#"{"title": "only"}"#).await;
    assert!(status.is_client_error());

    // Priority must be an integer
    let status = send_raw(
        &app,
        "POST",
        "/tasks",
        r#"{"title": "t", "description": "d", "due_date": "2025-01-01", "priority": "high"}"#,
    )
    .await;
    assert!(status.is_client_error());

    // Not JSON at all
    let status = send_raw(&app, "POST", "/tasks", "title=t").await;
    assert!(status.is_client_error());

    let (_, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(body, json!({"message": "No tasks found."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_numeric_id_is_rejected() {
    let app = test_app().await;

    let status = send_raw(&app, "DELETE", "/tasks/abc", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn priority_is_coerced_from_string_and_integral_float() {
    let app = test_app().await;

    let status = send_raw(
        &app,
        "POST",
        "/tasks",
        r#"{"title": "from string", "description": "", "due_date": "2025-01-01", "priority": "3"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let status = send_raw(
        &app,
        "POST",
        "/tasks",
        r#"{"title": "from float", "description": "", "due_date": "2025-01-01", "priority": 4.0}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Fractional priorities are not integers
    let status = send_raw(
        &app,
        "POST",
        "/tasks",
        r#"{"title": "half", "description": "", "due_date": "2025-01-01", "priority": 2.5}"#,
    )
    .await;
    assert!(status.is_client_error());

    let (_, body) = send(&app, "GET", "/tasks", None).await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["priority"], 3);
    assert_eq!(tasks[1]["priority"], 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_coerces_priority_string() {
    let app = test_app().await;

    send(&app, "POST", "/tasks", Some(task_body("draft", 1))).await;
    let (_, body) = send(&app, "GET", "/tasks", None).await;
    let id = body["tasks"][0]["id"].as_i64().unwrap();

    let status = send_raw(
        &app,
        "PUT",
        &format!("/tasks/{}", id),
        r#"{"title": "draft", "description": "", "due_date": "2025-01-01", "priority": "5"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(body["tasks"][0]["priority"], 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_failure_still_answers_normal_envelope() {
    let app = test_app_without_schema().await;

    let (status, body) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No tasks found."}));

    let (status, body) = send(&app, "POST", "/tasks", Some(task_body("lost", 1))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task added"}));

    let (status, body) = send(&app, "DELETE", "/tasks/clear_all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "All tasks cleared."}));
}
