//! SQLite WeatherHistoryRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::text;
use crate::db::{DbResult, WeatherHistoryRepository, WeatherRecord};

/// SQLx-backed weather history repository.
pub struct SqliteWeatherHistoryRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> WeatherHistoryRepository for SqliteWeatherHistoryRepository<'a> {
    async fn record(&self, city: &str, date: &str, weather: &str) -> DbResult<i64> {
        let result =
            sqlx::query("INSERT INTO weather_history (city, date, weather) VALUES (?, ?, ?)")
                .bind(city)
                .bind(date)
                .bind(weather)
                .execute(self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<WeatherRecord>> {
        // Same-day lookups keep newest-first via the id tiebreak
        let rows = sqlx::query(
            "SELECT id, city, date, weather FROM weather_history ORDER BY date DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| WeatherRecord {
                id: row.get("id"),
                city: text(row, "city"),
                date: text(row, "date"),
                weather: text(row, "weather"),
            })
            .collect())
    }

    async fn clear(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM weather_history")
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
