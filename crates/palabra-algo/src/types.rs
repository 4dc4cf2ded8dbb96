//! Common Types
//!
//! Shared data structures used across the algorithm modules.

use serde::{Deserialize, Serialize};

/// Minimum exposures before the accuracy rule can master a word
pub const ACCURACY_RULE_MIN_SHOWN: u32 = 5;

/// Accuracy threshold for the sustained-accuracy mastery rule
pub const ACCURACY_RULE_THRESHOLD: f64 = 0.8;

/// Streak length that masters a word outright
pub const MASTERY_STREAK: u32 = 3;

/// Immutable vocabulary catalog entry.
///
/// Loaded from the word catalog file; never mutated at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordEntry {
    /// Unique word id
    pub id: u32,
    /// English prompt shown to the user
    pub english: String,
    /// Accepted Spanish answers (order insignificant for matching)
    pub spanish: Vec<String>,
    /// Part of speech or topic bucket, e.g. "adjective"
    pub category: String,
    /// Frequency rank, lower = more common
    pub rank: u32,
    /// Optional hint shown alongside the prompt
    #[serde(default)]
    pub hint: Option<String>,
}

/// Per-word practice record, created lazily on first answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProgress {
    /// Total exposures, monotonically increasing
    pub times_shown: u32,
    /// Correct answers, always <= times_shown
    pub times_correct: u32,
    /// Consecutive-correct counter, reset to 0 on any miss
    pub streak: u32,
    /// Sticky mastery flag; once set it never reverts
    pub mastered: bool,
}

impl WordProgress {
    /// True for a record that has never been shown.
    pub fn is_new(&self) -> bool {
        self.times_shown == 0
    }
}
