use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;

use crate::cli::error::{CliError, CliResult};

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "SMARTLIFE_API_URL";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// API client for communicating with the Smart Life Manager REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. SMARTLIFE_API_URL environment variable
    /// 3. Default: http://127.0.0.1:8000
    pub fn new(api_url: Option<String>) -> Self {
        crate::install_crypto_provider();

        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL from the base plus escaped path segments.
    pub fn url(&self, segments: &[&str]) -> CliResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| CliError::InvalidResponse {
            message: format!("invalid API URL {}: {}", self.base_url, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| CliError::InvalidResponse {
                message: format!("API URL {} cannot have a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Create a GET request builder for an already built URL
    pub fn get_url(&self, url: Url) -> reqwest::RequestBuilder {
        self.client.get(url)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url)
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.put(&url)
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.delete(&url)
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success, or a
    /// `CliError::ApiError` carrying the server's `detail` (or raw body) on
    /// non-success status codes.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|body| body.detail)
                .unwrap_or(error_text);
            Err(CliError::ApiError { status, message })
        }
    }
}
