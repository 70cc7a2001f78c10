//! Integration tests for Note API endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::test_support::{send, test_app, test_app_without_schema};

#[tokio::test(flavor = "multi_thread")]
async fn notes_crud_flow() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No notes found."}));

    let (status, body) = send(&app, "POST", "/notes", Some(json!({"content": "Buy milk"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note added"}));

    let (_, body) = send(&app, "GET", "/notes", None).await;
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["content"], "Buy milk");
    let id = notes[0]["id"].as_i64().unwrap();

    let (_, body) = send(
        &app,
        "PUT",
        &format!("/notes/{}", id),
        Some(json!({"content": "Buy oat milk"})),
    )
    .await;
    assert_eq!(body, json!({"message": "Note updated"}));

    let (_, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(body["notes"][0], json!({"id": id, "content": "Buy oat milk"}));

    let (_, body) = send(&app, "DELETE", &format!("/notes/{}", id), None).await;
    assert_eq!(body, json!({"message": "Note deleted"}));

    let (_, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(body, json!({"message": "No notes found."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_note_reports_success() {
    let app = test_app().await;

    let (status, body) = send(&app, "PUT", "/notes/77", Some(json!({"content": "x"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note updated"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_all_notes_twice() {
    let app = test_app().await;

    send(&app, "POST", "/notes", Some(json!({"content": "one"}))).await;
    send(&app, "POST", "/notes", Some(json!({"content": "two"}))).await;

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/notes/clear_all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "All notes cleared."}));
    }

    let (_, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(body, json!({"message": "No notes found."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_failure_still_answers_normal_envelope() {
    let app = test_app_without_schema().await;

    let (status, body) = send(&app, "POST", "/notes", Some(json!({"content": "lost"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note added"}));

    let (status, body) = send(&app, "GET", "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No notes found."}));

    let (status, body) = send(&app, "PUT", "/notes/1", Some(json!({"content": "x"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note updated"}));
}
