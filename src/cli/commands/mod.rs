pub mod export;
pub mod note;
pub mod reminder;
pub mod task;
pub mod weather;

use serde::Deserialize;

use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};

/// `{"message": ...}` acknowledgement returned by every mutating endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

/// Send a mutating request and return the server's acknowledgement.
pub(crate) async fn send_for_message(request: reqwest::RequestBuilder) -> CliResult<String> {
    let response = request.send().await?;
    let ack: MessageResponse = ApiClient::handle_response(response).await?;
    Ok(ack.message)
}

/// Wipes go through here so every destructive command checks `--force`.
pub(crate) async fn clear(
    api_client: &ApiClient,
    path: &str,
    action: &'static str,
    force: bool,
) -> CliResult<String> {
    if !force {
        return Err(CliError::ForceRequired { action });
    }
    send_for_message(api_client.delete(path)).await
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;



#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;
