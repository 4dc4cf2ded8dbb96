//! SQLite progress backend.
//!
//! One `word_progress` row per practiced word, upserted on every
//! answer, plus a singleton `user_stats` row. The schema is created
//! at connect time; there is no migration tooling. Unlike the flat
//! file, reset zeroes the counters in place and preserves
//! `session_count`.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use palabra_algo::WordProgress;

use super::{ProgressData, ProgressStore, StoreError, UserStats};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS word_progress (
                word_id INTEGER PRIMARY KEY,
                times_shown INTEGER NOT NULL DEFAULT 0,
                times_correct INTEGER NOT NULL DEFAULT 0,
                streak INTEGER NOT NULL DEFAULT 0,
                mastered INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_stats (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                total_practiced INTEGER NOT NULL DEFAULT 0,
                total_correct INTEGER NOT NULL DEFAULT 0,
                session_count INTEGER NOT NULL DEFAULT 1,
                last_session TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_stats (id, total_practiced, total_correct, session_count, last_session)
            VALUES (1, 0, 0, 1, ?1)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProgressStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn load(&self) -> Result<ProgressData, StoreError> {
        let mut data = ProgressData::default();

        let stats_row = sqlx::query(
            r#"
            SELECT total_practiced, total_correct, session_count, last_session
            FROM user_stats WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = stats_row {
            data.user_stats = UserStats {
                total_practiced: row.try_get("total_practiced")?,
                total_correct: row.try_get("total_correct")?,
                session_count: row.try_get("session_count")?,
                last_session: row.try_get::<DateTime<Utc>, _>("last_session")?,
            };
        }

        let rows = sqlx::query(
            r#"
            SELECT word_id, times_shown, times_correct, streak, mastered
            FROM word_progress
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        for row in rows {
            let word_id = row.try_get::<i64, _>("word_id")? as u32;
            data.word_progress.insert(
                word_id,
                WordProgress {
                    times_shown: row.try_get::<i64, _>("times_shown")? as u32,
                    times_correct: row.try_get::<i64, _>("times_correct")? as u32,
                    streak: row.try_get::<i64, _>("streak")? as u32,
                    mastered: row.try_get("mastered")?,
                },
            );
        }

        Ok(data)
    }

    async fn save_word(
        &self,
        word_id: u32,
        progress: WordProgress,
        correct: bool,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO word_progress (word_id, times_shown, times_correct, streak, mastered)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(word_id) DO UPDATE SET
                times_shown = excluded.times_shown,
                times_correct = excluded.times_correct,
                streak = excluded.streak,
                mastered = excluded.mastered
            "#,
        )
        .bind(word_id as i64)
        .bind(progress.times_shown as i64)
        .bind(progress.times_correct as i64)
        .bind(progress.streak as i64)
        .bind(progress.mastered)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            UPDATE user_stats
            SET total_practiced = total_practiced + 1,
                total_correct = total_correct + ?1,
                last_session = ?2
            WHERE id = 1
            "#,
        )
        .bind(if correct { 1_i64 } else { 0 })
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM word_progress")
            .execute(&self.pool)
            .await?;

        // session_count survives a reset on this backend
        sqlx::query(
            r#"
            UPDATE user_stats
            SET total_practiced = 0, total_correct = 0
            WHERE id = 1
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
