//! The weather check pipeline.

use chrono::{DateTime, FixedOffset, Local};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use super::client::{CurrentWeather, WeatherApi};
use super::codes;
use crate::db::{Database, WeatherHistoryRepository};

/// Terminal failure of a weather check. Nothing is retried.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCheckError {
    #[error("Failed to get geolocation for city")]
    #[diagnostic(code(smartlife::weather::geocode_failed))]
    GeocodeFailed,

    #[error("Failed to get weather")]
    #[diagnostic(code(smartlife::weather::forecast_failed))]
    ForecastFailed,

    #[error("Weather data not available")]
    #[diagnostic(code(smartlife::weather::data_unavailable))]
    DataUnavailable,

    #[error("Failed to save weather history")]
    #[diagnostic(code(smartlife::weather::persist_failed))]
    PersistFailed,
}

/// Geocode, fetch, format, persist.
pub struct WeatherService<'a, D: Database, W: WeatherApi> {
    db: &'a D,
    api: &'a W,
}

impl<'a, D: Database, W: WeatherApi> WeatherService<'a, D, W> {
    pub fn new(db: &'a D, api: &'a W) -> Self {
        Self { db, api }
    }

    /// Check the weather for `city` now, in the server's local time zone.
    pub async fn check(&self, city: &str) -> Result<String, WeatherCheckError> {
        self.check_at(city, Local::now().fixed_offset()).await
    }

    /// Check the weather with an explicit clock reading.
    ///
    /// On success exactly one history row dated `now` is appended and the
    /// summary is returned.
    #[instrument(skip(self))]
    pub async fn check_at(
        &self,
        city: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<String, WeatherCheckError> {
        let coordinates = match self.api.geocode(city).await {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => {
                warn!(city, "No geocoding match");
                return Err(WeatherCheckError::GeocodeFailed);
            }
            Err(e) => {
                error!(city, error = %e, "Geocoding call failed");
                return Err(WeatherCheckError::GeocodeFailed);
            }
        };

        let current = match self.api.current_weather(coordinates).await {
            Ok(Some(current)) => current,
            Ok(None) => {
                warn!(city, "Forecast response has no current weather");
                return Err(WeatherCheckError::DataUnavailable);
            }
            Err(e) => {
                error!(city, error = %e, "Forecast call failed");
                return Err(WeatherCheckError::ForecastFailed);
            }
        };

        let summary = format_summary(city, &current, now);
        let date = now.format("%Y-%m-%d").to_string();

        self.db
            .weather_history()
            .record(city, &date, &summary)
            .await
            .map_err(|e| {
                error!(city, error = %e, "Failed to store weather history");
                WeatherCheckError::PersistFailed
            })?;

        info!(city, %summary, "Weather checked");
        Ok(summary)
    }
}

/// `"{city}: {temp}°C, {description}, wind {speed} km/h at {HH:MM} {offset}"`
pub fn format_summary(city: &str, current: &CurrentWeather, now: DateTime<FixedOffset>) -> String {
    format!(
        "{}: {}°C, {}, wind {} km/h at {}",
        city,
        current.temperature,
        codes::describe(current.weathercode),
        current.windspeed,
        now.format("%H:%M %:z"),
    )
}
