//! In-process API server for CLI command tests.

use tokio::net::TcpListener;

use crate::api::{AppState, routes};
use crate::cli::api_client::ApiClient;
use crate::db::{Database, SqliteDatabase};
use crate::api::handlers::test_support::sunny_weather;
use crate::weather::MockWeatherApi;

/// Spawn a test HTTP server with in-memory database
pub(crate) async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    spawn_test_server_with_weather(sunny_weather()).await
}

pub(crate) async fn spawn_test_server_with_weather(
    weather: MockWeatherApi,
) -> (String, tokio::task::JoinHandle<()>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    let app = routes::create_router(AppState::new(db, weather));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}

/// Server plus a client pointed at it.
pub(crate) async fn test_client() -> (ApiClient, tokio::task::JoinHandle<()>) {
    let (url, handle) = spawn_test_server().await;
    (ApiClient::new(Some(url)), handle)
}
