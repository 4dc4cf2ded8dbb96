//! Selection Policy
//!
//! Picks the next word to drill. Already-seen unmastered words are
//! reinforced before new words are introduced; among seen words the
//! pick is uniformly random to keep exposure varied, while new words
//! enter in ascending frequency rank so common vocabulary is learned
//! first.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{WordEntry, WordProgress};

/// Select the next word to present, or `None` once every word in the
/// catalog is mastered.
///
/// A word with no progress record is treated as never shown. The RNG
/// is injected so callers can seed it deterministically in tests.
/// Read-only with respect to `progress`.
pub fn next_word<'a, R: Rng + ?Sized>(
    catalog: &'a [WordEntry],
    progress: &HashMap<u32, WordProgress>,
    rng: &mut R,
) -> Option<&'a WordEntry> {
    let mut active: Vec<&WordEntry> = Vec::new();
    let mut new: Vec<&WordEntry> = Vec::new();

    for word in catalog {
        let record = progress.get(&word.id).copied().unwrap_or_default();
        if record.mastered {
            continue;
        }
        if record.times_shown > 0 {
            active.push(word);
        } else {
            new.push(word);
        }
    }

    if let Some(&selected) = active.choose(rng) {
        return Some(selected);
    }

    // min_by_key is stable, so equal ranks fall back to catalog order
    new.into_iter().min_by_key(|word| word.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordProgress;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn entry(id: u32, rank: u32) -> WordEntry {
        WordEntry {
            id,
            english: format!("word-{id}"),
            spanish: vec![format!("palabra-{id}")],
            category: "noun".to_string(),
            rank,
            hint: None,
        }
    }

    fn seen(times_shown: u32) -> WordProgress {
        WordProgress {
            times_shown,
            times_correct: 0,
            streak: 0,
            mastered: false,
        }
    }

    fn mastered() -> WordProgress {
        WordProgress {
            times_shown: 1,
            times_correct: 1,
            streak: 1,
            mastered: true,
        }
    }

    #[test]
    fn test_active_word_beats_new_words() {
        // A is active, B is mastered, C is unseen: always A.
        let catalog = vec![entry(1, 30), entry(2, 10), entry(3, 1)];
        let mut progress = HashMap::new();
        progress.insert(1, seen(2));
        progress.insert(2, mastered());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = next_word(&catalog, &progress, &mut rng).unwrap();
            assert_eq!(picked.id, 1);
        }
    }

    #[test]
    fn test_uniform_pick_covers_all_active_words() {
        let catalog = vec![entry(1, 1), entry(2, 2), entry(3, 3)];
        let mut progress = HashMap::new();
        for id in 1..=3 {
            progress.insert(id, seen(1));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut picked_ids = std::collections::HashSet::new();
        for _ in 0..200 {
            picked_ids.insert(next_word(&catalog, &progress, &mut rng).unwrap().id);
        }
        assert_eq!(picked_ids.len(), 3);
    }

    #[test]
    fn test_new_words_introduced_by_ascending_rank() {
        let catalog = vec![entry(1, 40), entry(2, 5), entry(3, 12)];
        let progress = HashMap::new();

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let picked = next_word(&catalog, &progress, &mut rng).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_rank_ties_break_by_catalog_order() {
        let catalog = vec![entry(9, 5), entry(4, 5), entry(7, 5)];
        let progress = HashMap::new();

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let picked = next_word(&catalog, &progress, &mut rng).unwrap();
        assert_eq!(picked.id, 9);
    }

    #[test]
    fn test_all_mastered_returns_none() {
        let catalog = vec![entry(1, 1), entry(2, 2)];
        let mut progress = HashMap::new();
        progress.insert(1, mastered());
        progress.insert(2, mastered());

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(next_word(&catalog, &progress, &mut rng).is_none());
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(next_word(&[], &HashMap::new(), &mut rng).is_none());
    }

    #[test]
    fn test_mastered_words_never_selected() {
        let catalog = vec![entry(1, 1), entry(2, 2), entry(3, 3)];
        let mut progress = HashMap::new();
        progress.insert(1, mastered());
        progress.insert(2, seen(4));

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            let picked = next_word(&catalog, &progress, &mut rng).unwrap();
            assert_ne!(picked.id, 1);
        }
    }
}
