//! Flat-file progress backend.
//!
//! Persists the whole [`ProgressData`] document as pretty-printed
//! JSON, re-reading and re-writing it on every update. A missing file
//! means a fresh install; reset simply deletes the file, which also
//! restarts `session_count` at 1 on the next load.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use palabra_algo::WordProgress;

use super::{ProgressData, ProgressStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write(&self, data: &ProgressData) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl ProgressStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<ProgressData, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(ProgressData::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save_word(
        &self,
        word_id: u32,
        progress: WordProgress,
        correct: bool,
    ) -> Result<(), StoreError> {
        let mut data = self.load().await?;

        data.word_progress.insert(word_id, progress);
        data.user_stats.total_practiced += 1;
        if correct {
            data.user_stats.total_correct += 1;
        }
        data.user_stats.last_session = Utc::now();

        self.write(&data).await
    }

    async fn reset(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
