//! Weather lookup and history handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, MessageResponse, or_logged};
use crate::api::AppState;
use crate::db::{Database, WeatherHistoryRepository, WeatherRecord};
use crate::weather::{WeatherApi, WeatherService};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    #[schema(example = "London: 10°C, Clear Sky ☀️, wind 5 km/h at 14:05 +01:00")]
    pub weather: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherRecordResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "London")]
    pub city: String,
    #[schema(example = "2025-05-01")]
    pub date: String,
    #[schema(example = "London: 10°C, Clear Sky ☀️, wind 5 km/h at 14:05 +01:00")]
    pub weather: String,
}

impl From<WeatherRecord> for WeatherRecordResponse {
    fn from(r: WeatherRecord) -> Self {
        Self {
            id: r.id,
            city: r.city,
            date: r.date,
            weather: r.weather,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeatherHistory {
    pub history: Vec<WeatherRecordResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum WeatherHistoryResponse {
    History(WeatherHistory),
    Empty(MessageResponse),
}

// =============================================================================
// Handlers
// =============================================================================

/// Look up current weather for a city and append it to the history.
#[utoipa::path(
    get,
    path = "/weather/{city}",
    tag = "weather",
    params(("city" = String, Path, description = "City name")),
    responses(
        (status = 200, description = "Current weather summary", body = WeatherResponse),
        (status = 400, description = "Lookup failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn check_weather<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>, (StatusCode, Json<ErrorResponse>)> {
    let weather = WeatherService::new(state.db(), state.weather())
        .check(&city)
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
        })?;

    Ok(Json(WeatherResponse { weather }))
}

#[utoipa::path(
    get,
    path = "/weather/history",
    tag = "weather",
    responses(
        (status = 200, description = "Past lookups, newest first, or a message when there are none", body = WeatherHistoryResponse)
    )
)]
#[instrument(skip(state))]
pub async fn weather_history<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<WeatherHistoryResponse> {
    let records = or_logged(
        state.db().weather_history().list().await,
        "list weather history",
    );

    if records.is_empty() {
        return Json(WeatherHistoryResponse::Empty(MessageResponse::new(
            "Weather history is not available.",
        )));
    }

    Json(WeatherHistoryResponse::History(WeatherHistory {
        history: records
            .into_iter()
            .map(WeatherRecordResponse::from)
            .collect(),
    }))
}

#[utoipa::path(
    delete,
    path = "/weather/history/reset",
    tag = "weather",
    responses(
        (status = 200, description = "Weather history reset", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn reset_weather_history<D: Database, W: WeatherApi>(
    State(state): State<AppState<D, W>>,
) -> Json<MessageResponse> {
    or_logged(
        state.db().weather_history().clear().await,
        "reset weather history",
    );
    Json(MessageResponse::new("Weather history reset."))
}
