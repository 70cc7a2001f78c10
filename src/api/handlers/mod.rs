//! HTTP handlers, one module per resource.
//!
//! Storage failures never reach the client: they are logged here and the
//! handler carries on with an empty or default result.

mod notes;
mod reminders;
mod system;
mod tasks;
mod weather;

#[cfg(test)]
mod notes_test;
#[cfg(test)]
mod reminders_test;
#[cfg(test)]
mod tasks_test;
#[cfg(test)]
pub(crate) mod test_support;

use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbResult;

pub use notes::*;
pub use reminders::*;
pub use system::*;
pub use tasks::*;
pub use weather::*;

/// Plain acknowledgement or empty-list envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Task added")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for rejected weather checks.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Failed to get geolocation for city")]
    pub detail: String,
}

/// Log a storage failure and fall back to `T::default()`.
pub(crate) fn or_logged<T: Default>(result: DbResult<T>, operation: &str) -> T {
    result.unwrap_or_else(|e| {
        error!(operation, error = %e, "Storage operation failed");
        T::default()
    })
}
