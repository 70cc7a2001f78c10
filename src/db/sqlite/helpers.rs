//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Read a nullable TEXT column, treating NULL as an empty string.
///
/// The legacy schema declares every column nullable.
pub fn text(row: &SqliteRow, column: &str) -> String {
    row.get::<Option<String>, _>(column).unwrap_or_default()
}

/// Read a nullable INTEGER column, treating NULL as zero.
pub fn integer(row: &SqliteRow, column: &str) -> i64 {
    row.get::<Option<i64>, _>(column).unwrap_or_default()
}
