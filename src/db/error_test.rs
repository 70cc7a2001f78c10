//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: tasks".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: tasks");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 1".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 1"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}

#[test]
fn sqlx_errors_map_to_database_variant() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_propagates_with_question_mark() {
    fn inner() -> DbResult<i64> {
        Err(DbError::Database {
            message: "boom".to_string(),
        })
    }

    fn outer() -> DbResult<i64> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(outer().is_err());
}
