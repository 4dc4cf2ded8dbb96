//! Mastery Rule
//!
//! Pure predicate deciding whether a practice record qualifies as
//! mastered. Three independent OR conditions; evaluation order does
//! not affect the outcome.

use crate::types::{WordProgress, ACCURACY_RULE_MIN_SHOWN, ACCURACY_RULE_THRESHOLD, MASTERY_STREAK};

/// Check whether a word's practice record meets any mastery rule.
///
/// Rules:
/// 1. Correct on the very first attempt.
/// 2. A streak of three or more consecutive correct answers.
/// 3. Shown at least five times with 80%+ overall accuracy.
///
/// This function looks only at the counters; the sticky `mastered`
/// flag is maintained by [`WordProgress::record_answer`], which never
/// reverts it even if the counters later fall below these thresholds.
///
/// [`WordProgress::record_answer`]: crate::answer
pub fn is_mastered(progress: &WordProgress) -> bool {
    if progress.times_shown == 1 && progress.times_correct == 1 {
        return true;
    }
    if progress.streak >= MASTERY_STREAK {
        return true;
    }
    if progress.times_shown >= ACCURACY_RULE_MIN_SHOWN
        && progress.times_correct as f64 / progress.times_shown as f64 >= ACCURACY_RULE_THRESHOLD
    {
        return true;
    }
    false
}
