use crate::api::handlers::test_support::no_current_data;
use crate::cli::api_client::ApiClient;
use crate::cli::commands::weather::*;
use crate::cli::error::CliError;

use super::test_support::{spawn_test_server_with_weather, test_client};

#[tokio::test(flavor = "multi_thread")]
async fn test_check_weather_and_history_integration() {
    let (api_client, _handle) = test_client().await;

    assert_eq!(
        weather_history(&api_client, "table").await.unwrap(),
        "Weather history is not available."
    );

    let summary = check_weather(&api_client, "New York").await.unwrap();
    assert!(summary.starts_with("New York: "));
    assert!(summary.contains("Clear Sky"));

    let history = fetch_history(&api_client).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].city, "New York");
    assert_eq!(history[0].weather, summary);

    let table = weather_history(&api_client, "table").await.unwrap();
    assert!(table.contains("New York"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_weather_failure_carries_detail() {
    let (url, _handle) = spawn_test_server_with_weather(no_current_data()).await;
    let api_client = ApiClient::new(Some(url));

    let err = check_weather(&api_client, "London").await.unwrap_err();
    match err {
        CliError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Weather data not available");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fetch_history(&api_client).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reset_history_requires_force() {
    let (api_client, _handle) = test_client().await;
    check_weather(&api_client, "London").await.unwrap();

    assert!(matches!(
        reset_history(&api_client, false).await,
        Err(CliError::ForceRequired { .. })
    ));
    assert_eq!(fetch_history(&api_client).await.unwrap().len(), 1);

    assert_eq!(
        reset_history(&api_client, true).await.unwrap(),
        "Weather history reset."
    );
    assert!(fetch_history(&api_client).await.unwrap().is_empty());
}
