use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to API server")]
    #[diagnostic(
        code(smartlife::cli::connection_failed),
        help(
            "Is the API server running? Try: smartlife-api\nOr set SMARTLIFE_API_URL environment variable to point to the correct server."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(smartlife::cli::invalid_response),
        help(
            "The server returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(smartlife::cli::api_error))]
    ApiError { status: u16, message: String },

    #[error("Refusing to {action} without --force")]
    #[diagnostic(
        code(smartlife::cli::force_required),
        help("This action is destructive and cannot be undone. Re-run with --force.")
    )]
    ForceRequired { action: &'static str },

    #[error("Failed to write {path}: {source}")]
    #[diagnostic(code(smartlife::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    #[diagnostic(code(smartlife::cli::terminal))]
    Terminal(#[source] std::io::Error),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed { source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
