//! Database abstraction layer.
//!
//! Trait-based access to the four tables so the API layer never names a
//! concrete backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Task, Note, Reminder, WeatherRecord)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
