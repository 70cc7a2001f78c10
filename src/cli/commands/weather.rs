use crate::cli::api_client::ApiClient;
use crate::cli::commands::clear;
use crate::cli::error::CliResult;
use crate::cli::utils::apply_table_style;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: i64,
    pub city: String,
    pub date: String,
    pub weather: String,
}

#[derive(Tabled)]
pub(crate) struct WeatherDisplay {
    #[tabled(rename = "City")]
    pub(crate) city: String,
    #[tabled(rename = "Date")]
    pub(crate) date: String,
    #[tabled(rename = "Weather")]
    pub(crate) weather: String,
}

impl From<&WeatherRecord> for WeatherDisplay {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            city: record.city.clone(),
            date: record.date.clone(),
            weather: record.weather.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    history: Vec<WeatherRecord>,
}

/// Look up current weather for a city. The server records the result.
pub async fn check_weather(api_client: &ApiClient, city: &str) -> CliResult<String> {
    let url = api_client.url(&["weather", city])?;
    let response = api_client.get_url(url).send().await?;
    let body: WeatherResponse = ApiClient::handle_response(response).await?;
    Ok(body.weather)
}

async fn fetch_listing(api_client: &ApiClient) -> CliResult<HistoryResponse> {
    let response = api_client.get("/weather/history").send().await?;
    ApiClient::handle_response(response).await
}

pub async fn fetch_history(api_client: &ApiClient) -> CliResult<Vec<WeatherRecord>> {
    Ok(fetch_listing(api_client).await?.history)
}

/// Show past lookups, newest first
pub async fn weather_history(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let listing = fetch_listing(api_client).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&listing.history)?),
        _ if listing.history.is_empty() => Ok(listing
            .message
            .unwrap_or_else(|| "Weather history is not available.".to_string())),
        _ => {
            let display: Vec<WeatherDisplay> = listing.history.iter().map(|r| r.into()).collect();
            let mut table = Table::new(display);
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}

/// Drop all weather history (requires --force flag for safety)
pub async fn reset_history(api_client: &ApiClient, force: bool) -> CliResult<String> {
    clear(
        api_client,
        "/weather/history/reset",
        "reset weather history",
        force,
    )
    .await
}
