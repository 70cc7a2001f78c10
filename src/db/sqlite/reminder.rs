//! SQLite ReminderRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::text;
use crate::db::{DbResult, Reminder, ReminderInput, ReminderRepository};

/// SQLx-backed reminder repository.
pub struct SqliteReminderRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> ReminderRepository for SqliteReminderRepository<'a> {
    async fn create(&self, reminder: &ReminderInput) -> DbResult<i64> {
        let result = sqlx::query("INSERT INTO reminders (content, date) VALUES (?, ?)")
            .bind(&reminder.content)
            .bind(&reminder.date)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<Reminder>> {
        let rows = sqlx::query("SELECT id, content, date FROM reminders ORDER BY date, id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows.iter().map(row_to_reminder).collect())
    }

    async fn list_for_date(&self, date: &str) -> DbResult<Vec<Reminder>> {
        let rows = sqlx::query("SELECT id, content, date FROM reminders WHERE date = ? ORDER BY id")
            .bind(date)
            .fetch_all(self.pool)
            .await?;
        Ok(rows.iter().map(row_to_reminder).collect())
    }

    async fn update(&self, id: i64, reminder: &ReminderInput) -> DbResult<()> {
        sqlx::query("UPDATE reminders SET content = ?, date = ? WHERE id = ?")
            .bind(&reminder.content)
            .bind(&reminder.date)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM reminders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM reminders")
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_reminder(row: &SqliteRow) -> Reminder {
    Reminder {
        id: row.get("id"),
        content: text(row, "content"),
        date: text(row, "date"),
    }
}
