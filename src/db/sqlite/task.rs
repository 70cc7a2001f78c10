//! SQLite TaskRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{integer, text};
use crate::db::{DbResult, Task, TaskInput, TaskRepository};

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TaskRepository for SqliteTaskRepository<'a> {
    async fn create(&self, task: &TaskInput) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, due_date, priority) VALUES (?, ?, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.due_date)
        .bind(task.priority)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, title, description, due_date, priority FROM tasks ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(row_to_task).collect())
    }

    async fn update(&self, id: i64, task: &TaskInput) -> DbResult<()> {
        sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, due_date = ?, priority = ? WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.due_date)
        .bind(task.priority)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM tasks").execute(self.pool).await?;
        Ok(())
    }
}

fn row_to_task(row: &SqliteRow) -> Task {
    Task {
        id: row.get("id"),
        title: text(row, "title"),
        description: text(row, "description"),
        due_date: text(row, "due_date"),
        priority: integer(row, "priority"),
    }
}
