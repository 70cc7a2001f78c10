//! Repository traits for data access abstraction.
//!
//! Every method maps to exactly one SQL statement. Updates and deletes do not
//! check that the row exists: a missing id is a silent no-op.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Note, Reminder, ReminderInput, Task, TaskInput, WeatherRecord},
};

/// Repository for Task operations.
pub trait TaskRepository {
    /// Insert a task and return its new id.
    fn create(&self, task: &TaskInput) -> impl Future<Output = DbResult<i64>> + Send;

    /// All tasks in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Overwrite every writable field of the task with the given id.
    fn update(&self, id: i64, task: &TaskInput) -> impl Future<Output = DbResult<()>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;

    /// Remove every task.
    fn delete_all(&self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Note operations.
pub trait NoteRepository {
    fn create(&self, content: &str) -> impl Future<Output = DbResult<i64>> + Send;

    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    fn update(&self, id: i64, content: &str) -> impl Future<Output = DbResult<()>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;

    fn delete_all(&self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Reminder operations.
pub trait ReminderRepository {
    fn create(&self, reminder: &ReminderInput) -> impl Future<Output = DbResult<i64>> + Send;

    /// All reminders ordered by date ascending.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Reminder>>> + Send;

    /// Reminders whose date string equals `date` exactly.
    fn list_for_date(&self, date: &str) -> impl Future<Output = DbResult<Vec<Reminder>>> + Send;

    fn update(
        &self,
        id: i64,
        reminder: &ReminderInput,
    ) -> impl Future<Output = DbResult<()>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;

    fn delete_all(&self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Append-only log of successful weather lookups.
pub trait WeatherHistoryRepository {
    fn record(
        &self,
        city: &str,
        date: &str,
        weather: &str,
    ) -> impl Future<Output = DbResult<i64>> + Send;

    /// All records, newest date first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<WeatherRecord>>> + Send;

    fn clear(&self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Storage backend: owns the connection pool and hands out repositories.
///
/// Repositories borrow the backend, so they are cheap to create per request.
pub trait Database: Send + Sync + 'static {
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;
    type Notes<'a>: NoteRepository + Send + Sync
    where
        Self: 'a;
    type Reminders<'a>: ReminderRepository + Send + Sync
    where
        Self: 'a;
    type WeatherHistory<'a>: WeatherHistoryRepository + Send + Sync
    where
        Self: 'a;

    /// Apply pending schema migrations. Safe to call repeatedly.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Release every connection. Later queries fail with a database error.
    fn close(&self) -> impl Future<Output = ()> + Send;

    fn tasks(&self) -> Self::Tasks<'_>;

    fn notes(&self) -> Self::Notes<'_>;

    fn reminders(&self) -> Self::Reminders<'_>;

    fn weather_history(&self) -> Self::WeatherHistory<'_>;
}
