//! SQLite NoteRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::text;
use crate::db::{DbResult, Note, NoteRepository};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> NoteRepository for SqliteNoteRepository<'a> {
    async fn create(&self, content: &str) -> DbResult<i64> {
        let result = sqlx::query("INSERT INTO notes (content) VALUES (?)")
            .bind(content)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query("SELECT id, content FROM notes ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Note {
                id: row.get("id"),
                content: text(row, "content"),
            })
            .collect())
    }

    async fn update(&self, id: i64, content: &str) -> DbResult<()> {
        sqlx::query("UPDATE notes SET content = ? WHERE id = ?")
            .bind(content)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM notes").execute(self.pool).await?;
        Ok(())
    }
}
