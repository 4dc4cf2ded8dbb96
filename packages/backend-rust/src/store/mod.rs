//! Progress persistence.
//!
//! The store keeps one [`WordProgress`] record per practiced word plus
//! the singleton [`UserStats`] counters. Two backends implement the
//! same interface: a flat JSON file (the default) and a SQLite
//! database selected via `DATABASE_URL`. Each request is an
//! independent read-modify-write unit; there is no cross-request
//! locking and concurrent writes are last-writer-wins.

pub mod file;
pub mod sqlite;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use palabra_algo::WordProgress;

pub use file::FileStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("progress file malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Aggregate practice counters, one row/object per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total_practiced: i64,
    pub total_correct: i64,
    pub session_count: i64,
    pub last_session: DateTime<Utc>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_practiced: 0,
            total_correct: 0,
            session_count: 1,
            last_session: Utc::now(),
        }
    }
}

/// Everything the store persists, in one loadable unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressData {
    pub user_stats: UserStats,
    pub word_progress: HashMap<u32, WordProgress>,
}

/// Persistence interface for practice progress.
///
/// `save_word` folds the stats update into the same write unit as the
/// word record so a backend can persist both together: it bumps
/// `total_practiced` (and `total_correct` when the answer was
/// correct) and stamps `last_session`.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Short backend label for the health endpoint.
    fn backend(&self) -> &'static str;

    /// Load all persisted progress. A store that has never been
    /// written to yields zeroed stats and an empty progress map.
    async fn load(&self) -> Result<ProgressData, StoreError>;

    /// Persist one word's updated record and the matching stats bump.
    async fn save_word(
        &self,
        word_id: u32,
        progress: WordProgress,
        correct: bool,
    ) -> Result<(), StoreError>;

    /// Clear all word progress and zero the practice counters.
    async fn reset(&self) -> Result<(), StoreError>;
}
