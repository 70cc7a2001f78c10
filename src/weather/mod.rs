//! Weather lookups: geocode a city, fetch current conditions, keep a history.
//!
//! - `codes`: WMO weather code descriptions
//! - `client`: upstream HTTP client behind the [`WeatherApi`] trait
//! - `service`: the check pipeline and its failure outcomes

mod client;
pub mod codes;
mod service;


pub use client::{Coordinates, CurrentWeather, OpenMeteoClient, WeatherApi, WeatherError};
pub use service::{WeatherCheckError, WeatherService, format_summary};

#[cfg(test)]
pub(crate) use client::MockWeatherApi;
