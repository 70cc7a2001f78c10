//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod note;
mod reminder;
mod task;
mod weather;


pub use connection::SqliteDatabase;
pub use note::SqliteNoteRepository;
pub use reminder::SqliteReminderRepository;
pub use task::SqliteTaskRepository;
pub use weather::SqliteWeatherHistoryRepository;
