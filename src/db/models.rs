//! Domain models for the smartlife database.
//!
//! These models are storage-agnostic and mirror the four tables one-to-one.

use serde::{Deserialize, Serialize};

/// A to-do item with a free-form due date and priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, stored verbatim.
    pub due_date: String,
    /// Intended range 1-5, not enforced.
    pub priority: i64,
}

/// Writable fields of a task, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
}

/// A dated reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub content: String,
    /// `YYYY-MM-DD`, compared by exact string equality.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderInput {
    pub content: String,
    pub date: String,
}

/// One successful weather lookup. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub id: i64,
    pub city: String,
    pub date: String,
    /// Pre-formatted human-readable summary.
    pub weather: String,
}
