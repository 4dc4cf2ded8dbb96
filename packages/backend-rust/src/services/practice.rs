//! Practice flow orchestration.
//!
//! Each operation is one read-modify-write unit over the catalog and
//! the progress store: load state, run the core algorithms, persist,
//! answer. The catalog and store are passed in explicitly so tests
//! and handlers share the same entry points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use palabra_algo::{check_answer, next_word as pick_next_word, WordEntry};

use crate::catalog::{Catalog, CatalogError};
use crate::store::{ProgressStore, StoreError};

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("word {0} not found")]
    WordNotFound(u32),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Prompt payload for the client. Accepted answers are withheld; the
/// client only sees them after submitting.
#[derive(Debug, Serialize)]
pub struct WordPrompt {
    pub id: u32,
    pub english: String,
    pub category: String,
    pub hint: String,
    pub rank: u32,
}

impl From<&WordEntry> for WordPrompt {
    fn from(word: &WordEntry) -> Self {
        Self {
            id: word.id,
            english: word.english.clone(),
            category: word.category.clone(),
            hint: word.hint.clone().unwrap_or_default(),
            rank: word.rank,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NextWordResponse {
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordPrompt>,
}

#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub word_id: u32,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub valid_answers: Vec<String>,
    pub mastered: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    pub total_words: usize,
    pub mastered: usize,
    pub total_practiced: i64,
    pub total_correct: i64,
    pub accuracy: f64,
    pub session_count: i64,
    pub last_session: String,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn next_word(
    catalog: &Catalog,
    store: &dyn ProgressStore,
) -> Result<NextWordResponse, PracticeError> {
    let words = catalog.load().await?;
    let data = store.load().await?;

    match pick_next_word(&words, &data.word_progress, &mut rand::thread_rng()) {
        Some(word) => Ok(NextWordResponse {
            done: false,
            message: None,
            word: Some(WordPrompt::from(word)),
        }),
        None => Ok(NextWordResponse {
            done: true,
            message: Some("All words mastered!"),
            word: None,
        }),
    }
}

pub async fn submit_answer(
    catalog: &Catalog,
    store: &dyn ProgressStore,
    word_id: u32,
    answer: &str,
) -> Result<CheckAnswerResponse, PracticeError> {
    let words = catalog.load().await?;
    let word = words
        .iter()
        .find(|word| word.id == word_id)
        .ok_or(PracticeError::WordNotFound(word_id))?;

    let correct = check_answer(answer, &word.spanish);

    let data = store.load().await?;
    let mut progress = data.word_progress.get(&word_id).copied().unwrap_or_default();
    progress.record_answer(correct);
    store.save_word(word_id, progress, correct).await?;

    Ok(CheckAnswerResponse {
        correct,
        valid_answers: word.spanish.clone(),
        mastered: progress.mastered,
        streak: progress.streak,
    })
}

pub async fn summary(
    catalog: &Catalog,
    store: &dyn ProgressStore,
) -> Result<ProgressSummary, PracticeError> {
    let words = catalog.load().await?;
    let data = store.load().await?;
    let stats = &data.user_stats;

    let mastered = data
        .word_progress
        .values()
        .filter(|progress| progress.mastered)
        .count();

    // denominator floored at 1 so a fresh store reads 0.0 accuracy
    let accuracy = stats.total_correct as f64 / stats.total_practiced.max(1) as f64 * 100.0;
    let accuracy = (accuracy * 10.0).round() / 10.0;

    Ok(ProgressSummary {
        total_words: words.len(),
        mastered,
        total_practiced: stats.total_practiced,
        total_correct: stats.total_correct,
        accuracy,
        session_count: stats.session_count,
        last_session: stats.last_session.to_rfc3339(),
    })
}

pub async fn reset(store: &dyn ProgressStore) -> Result<ResetResponse, PracticeError> {
    store.reset().await?;
    Ok(ResetResponse {
        success: true,
        message: "Progress reset successfully",
    })
}
