//! Shared helpers for handler tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};
use crate::weather::{Coordinates, CurrentWeather, MockWeatherApi, WeatherError};

const LONDON: Coordinates = Coordinates {
    latitude: 51.5,
    longitude: -0.12,
};

fn clear_sky() -> CurrentWeather {
    CurrentWeather {
        temperature: 10.0,
        windspeed: 5.0,
        weathercode: 0,
    }
}

/// Every city resolves to London at 10°C, wind 5 km/h, clear sky.
pub(crate) fn sunny_weather() -> MockWeatherApi {
    let mut api = MockWeatherApi::new();
    api.expect_geocode()
        .returning(|_| Box::pin(async { Ok(Some(LONDON)) }));
    api.expect_current_weather()
        .returning(|_| Box::pin(async { Ok(Some(clear_sky())) }));
    api
}

/// Geocoding finds nothing. The forecast must never be asked.
pub(crate) fn unknown_city() -> MockWeatherApi {
    let mut api = MockWeatherApi::new();
    api.expect_geocode()
        .returning(|_| Box::pin(async { Ok(None) }));
    api.expect_current_weather().never();
    api
}

/// Geocoding works, the forecast comes back without a current block.
pub(crate) fn no_current_data() -> MockWeatherApi {
    let mut api = MockWeatherApi::new();
    api.expect_geocode()
        .returning(|_| Box::pin(async { Ok(Some(LONDON)) }));
    api.expect_current_weather()
        .returning(|_| Box::pin(async { Ok(None) }));
    api
}

/// Geocoding works, the forecast request errors.
pub(crate) fn forecast_down() -> MockWeatherApi {
    let mut api = MockWeatherApi::new();
    api.expect_geocode()
        .returning(|_| Box::pin(async { Ok(Some(LONDON)) }));
    api.expect_current_weather().returning(|_| {
        Box::pin(async {
            Err(WeatherError::InvalidResponse {
                message: "timeout".to_string(),
            })
        })
    });
    api
}

/// Create a test app with an in-memory database and a sunny London.
pub(crate) async fn test_app() -> Router {
    test_app_with_weather(sunny_weather()).await
}

pub(crate) async fn test_app_with_weather(weather: MockWeatherApi) -> Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    routes::create_router(AppState::new(db, weather))
}

/// App over a database whose schema was never applied, so every query fails.
pub(crate) async fn test_app_without_schema() -> Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    routes::create_router(AppState::new(db, sunny_weather()))
}

/// Helper to parse JSON response body
pub(crate) async fn json_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Send a request with an optional JSON body, returning status and parsed body.
pub(crate) async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

/// Like [`send`] but for responses that may not be JSON.
pub(crate) async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}
