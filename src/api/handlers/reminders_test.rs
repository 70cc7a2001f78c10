//! Integration tests for Reminder API endpoints.

use axum::http::StatusCode;
use chrono::{Days, Local};
use serde_json::json;

use super::test_support::{send, test_app, test_app_without_schema};

fn local_date(offset_days: i64) -> String {
    let today = Local::now().date_naive();
    let date = if offset_days >= 0 {
        today + Days::new(offset_days as u64)
    } else {
        today - Days::new(offset_days.unsigned_abs())
    };
    date.format("%Y-%m-%d").to_string()
}

#[tokio::test(flavor = "multi_thread")]
async fn reminders_empty_envelopes() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/reminders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No reminders found."}));

    let (status, body) = send(&app, "GET", "/reminders/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No reminders for today."}));
}

#[tokio::test(flavor = "multi_thread")]
async fn reminders_round_trip_sorted_by_date() {
    let app = test_app().await;

    let (_, body) = send(
        &app,
        "POST",
        "/reminders",
        Some(json!({"content": "Later", "date": "2030-01-02"})),
    )
    .await;
    assert_eq!(body, json!({"message": "Reminder added"}));
    send(
        &app,
        "POST",
        "/reminders",
        Some(json!({"content": "Sooner", "date": "2030-01-01"})),
    )
    .await;

    let (_, body) = send(&app, "GET", "/reminders", None).await;
    let reminders = body["reminders"].as_array().unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0]["content"], "Sooner");
    assert_eq!(reminders[0]["date"], "2030-01-01");
    assert_eq!(reminders[1]["content"], "Later");
}

#[tokio::test(flavor = "multi_thread")]
async fn today_only_includes_todays_date() {
    let app = test_app().await;

    for (content, offset) in [("yesterday", -1), ("today", 0), ("tomorrow", 1)] {
        send(
            &app,
            "POST",
            "/reminders",
            Some(json!({"content": content, "date": local_date(offset)})),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/reminders/today", None).await;
    assert_eq!(status, StatusCode::OK);

    let today = body["today_reminders"].as_array().unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["content"], "today");
    assert_eq!(today[0]["date"], local_date(0));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_delete_and_clear_reminders() {
    let app = test_app().await;

    send(
        &app,
        "POST",
        "/reminders",
        Some(json!({"content": "Dentist", "date": "2030-03-03"})),
    )
    .await;
    let (_, body) = send(&app, "GET", "/reminders", None).await;
    let id = body["reminders"][0]["id"].as_i64().unwrap();

    let (_, body) = send(
        &app,
        "PUT",
        &format!("/reminders/{}", id),
        Some(json!({"content": "Dentist (moved)", "date": "2030-03-04"})),
    )
    .await;
    assert_eq!(body, json!({"message": "Reminder updated"}));

    let (_, body) = send(&app, "GET", "/reminders", None).await;
    assert_eq!(
        body["reminders"][0],
        json!({"id": id, "content": "Dentist (moved)", "date": "2030-03-04"})
    );

    let (_, body) = send(
        &app,
        "PUT",
        "/reminders/31337",
        Some(json!({"content": "nobody", "date": "2030-01-01"})),
    )
    .await;
    assert_eq!(body, json!({"message": "Reminder updated"}));

    let (_, body) = send(&app, "DELETE", &format!("/reminders/{}", id), None).await;
    assert_eq!(body, json!({"message": "Reminder deleted"}));

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/reminders/clear_all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "All reminders cleared."}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_failure_still_answers_normal_envelope() {
    let app = test_app_without_schema().await;

    let (status, body) = send(&app, "GET", "/reminders/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "No reminders for today."}));

    let (status, body) = send(&app, "DELETE", "/reminders/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Reminder deleted"}));
}
