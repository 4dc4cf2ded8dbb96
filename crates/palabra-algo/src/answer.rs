//! Answer Evaluation
//!
//! Free-text answer normalization and matching, plus the progress
//! update applied after every graded answer.

use crate::mastery::is_mastered;
use crate::types::WordProgress;

/// Normalize an answer for comparison: trim surrounding whitespace
/// and lowercase. No accent folding, no punctuation stripping.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Check whether a raw answer matches any accepted answer, comparing
/// normalized forms. Short-circuits on the first match.
pub fn check_answer(raw_answer: &str, accepted: &[String]) -> bool {
    let normalized = normalize_answer(raw_answer);
    accepted
        .iter()
        .any(|candidate| normalize_answer(candidate) == normalized)
}

impl WordProgress {
    /// Apply one graded answer to this record.
    ///
    /// Increments `times_shown`; on a correct answer also increments
    /// `times_correct` and `streak`, on a miss resets `streak` to 0.
    /// The mastery flag is then re-evaluated as a one-way latch: once
    /// set it stays set even if the counters regress below the rule
    /// thresholds.
    pub fn record_answer(&mut self, correct: bool) {
        self.times_shown += 1;
        if correct {
            self.times_correct += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.mastered = self.mastered || is_mastered(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_answer("  Hola "), "hola");
        assert_eq!(normalize_answer("GRANDE"), "grande");
        assert_eq!(normalize_answer("hola"), "hola");
    }

    #[test]
    fn test_normalize_keeps_accents_and_punctuation() {
        assert_eq!(normalize_answer(" Qué "), "qué");
        assert_eq!(normalize_answer("¡hola!"), "¡hola!");
    }

    #[test]
    fn test_check_answer_matches_any_accepted_form() {
        let accepted = vec!["bonito".to_string(), "bonita".to_string()];
        assert!(check_answer("bonita", &accepted));
        assert!(check_answer("  Bonito ", &accepted));
        assert!(!check_answer("bonitos", &accepted));
    }

    #[test]
    fn test_check_answer_normalizes_accepted_side_too() {
        let accepted = vec![" Hola ".to_string()];
        assert!(check_answer("hola", &accepted));
    }

    #[test]
    fn test_check_answer_empty_accepted_list() {
        assert!(!check_answer("hola", &[]));
    }

    #[test]
    fn test_record_answer_counts_and_streak() {
        let mut progress = WordProgress::default();
        progress.record_answer(false);
        assert_eq!(progress.times_shown, 1);
        assert_eq!(progress.times_correct, 0);
        assert_eq!(progress.streak, 0);

        progress.record_answer(true);
        progress.record_answer(true);
        assert_eq!(progress.times_shown, 3);
        assert_eq!(progress.times_correct, 2);
        assert_eq!(progress.streak, 2);

        progress.record_answer(false);
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.times_correct, 2);
    }

    #[test]
    fn test_record_answer_first_try_masters() {
        let mut progress = WordProgress::default();
        progress.record_answer(true);
        assert!(progress.mastered);
    }

    #[test]
    fn test_record_answer_streak_masters() {
        let mut progress = WordProgress::default();
        progress.record_answer(false);
        progress.record_answer(true);
        progress.record_answer(true);
        assert!(!progress.mastered);
        progress.record_answer(true);
        assert!(progress.mastered);
    }

    #[test]
    fn test_mastery_is_sticky() {
        // Master via streak, then miss: counters no longer satisfy
        // any rule but the flag must hold.
        let mut progress = WordProgress {
            times_shown: 4,
            times_correct: 3,
            streak: 3,
            mastered: true,
        };
        progress.record_answer(false);
        assert!(progress.mastered);
        assert_eq!(progress.streak, 0);
    }

    #[test]
    fn test_invariant_correct_never_exceeds_shown() {
        let mut progress = WordProgress::default();
        for i in 0..20 {
            progress.record_answer(i % 3 != 0);
            assert!(progress.times_correct <= progress.times_shown);
        }
    }
}
