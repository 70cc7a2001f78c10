//! Upstream geocoding and forecast client.
//!
//! Geocoding follows the Nominatim search API, forecasts the Open-Meteo
//! `current_weather` API. Both base URLs come from configuration.

use std::future::Future;
use std::time::Duration;

use miette::Diagnostic;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::WeatherConfig;

/// Errors talking to the upstream services.
#[derive(Error, Diagnostic, Debug)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    #[diagnostic(code(smartlife::weather::http))]
    Http(#[from] reqwest::Error),

    #[error("Unexpected upstream response: {message}")]
    #[diagnostic(code(smartlife::weather::invalid_response))]
    InvalidResponse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions block of a forecast response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// km/h.
    pub windspeed: f64,
    pub weathercode: i64,
}

/// Source of coordinates and current conditions. Can be mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait WeatherApi: Send + Sync + 'static {
    /// Resolve a city name. `Ok(None)` when the service knows no such place.
    fn geocode(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, WeatherError>> + Send;

    /// Current conditions at a location. `Ok(None)` when the response carries
    /// no current-weather block.
    fn current_weather(
        &self,
        at: Coordinates,
    ) -> impl Future<Output = Result<Option<CurrentWeather>, WeatherError>> + Send;
}

#[derive(Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

/// reqwest-backed [`WeatherApi`].
pub struct OpenMeteoClient {
    client: Client,
    geocode_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    /// Build a client with the configured endpoints, timeout and user agent.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        crate::install_crypto_provider();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            geocode_url: config.geocode_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }
}

impl WeatherApi for OpenMeteoClient {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>, WeatherError> {
        let hits: Vec<GeocodeHit> = self
            .client
            .get(&self.geocode_url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(hit) = hits.into_iter().next() else {
            debug!(city, "Geocoding returned no results");
            return Ok(None);
        };

        let latitude = parse_degrees(&hit.lat)?;
        let longitude = parse_degrees(&hit.lon)?;
        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }

    async fn current_weather(
        &self,
        at: Coordinates,
    ) -> Result<Option<CurrentWeather>, WeatherError> {
        let params = [
            ("latitude", at.latitude.to_string()),
            ("longitude", at.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("windspeed_unit", "kmh".to_string()),
        ];

        let response: ForecastResponse = self
            .client
            .get(&self.forecast_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.current_weather)
    }
}

fn parse_degrees(value: &str) -> Result<f64, WeatherError> {
    value
        .trim()
        .parse()
        .map_err(|_| WeatherError::InvalidResponse {
            message: format!("'{}' is not a coordinate", value),
        })
}
