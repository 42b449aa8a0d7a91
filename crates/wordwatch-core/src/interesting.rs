//! Interesting-word selection.
//!
//! Surfaces a bounded list of "interesting" words: long, frequently
//! used words first, singleton-occurrence words only as a last resort.
//! The shrinking-threshold scan below reproduces the legacy selection
//! order exactly — see the algorithm notes on [`select`] before
//! changing anything here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::frequency::WordFrequencyModel;

/// The minimum token length the first scan requires.
const INITIAL_MIN_LENGTH: usize = 10;

/// A selected word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestingWord {
    /// The word itself.
    pub word: String,
    /// How often it occurred in the document.
    pub count: u64,
}

/// Select up to `n` interesting words from a frequency model.
///
/// Algorithm (legacy, preserved for compatibility):
/// 1. Rank distinct words by descending count (ties alphabetical, so
///    selection is deterministic).
/// 2. Scan the ranking admitting unseen words of length ≥ the current
///    minimum (starting at 10), but abort the scan at the first word
///    with count 1 — singletons form a trailing block in the ranking
///    and must not be admitted at a high length threshold.
/// 3. Drop the minimum by 1 after each incomplete scan. Below 2, stop
///    filtering and admit remaining words in rank order, singletons
///    included, until the target is met.
/// 4. Re-sort the final selection by descending count.
///
/// Requesting more words than exist returns every distinct word.
#[tracing::instrument(skip(model), fields(distinct = model.distinct_words(), n))]
pub fn select(model: &WordFrequencyModel, n: usize) -> Vec<InterestingWord> {
    let mut ranked: Vec<(&str, u64)> = model.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let target = n.min(ranked.len());
    let mut selected: Vec<InterestingWord> = Vec::with_capacity(target);
    let mut admitted: HashSet<&str> = HashSet::with_capacity(target);
    let mut min_len = INITIAL_MIN_LENGTH;

    while selected.len() < target {
        if min_len < 2 {
            for &(word, count) in &ranked {
                if selected.len() == target {
                    break;
                }
                if admitted.insert(word) {
                    selected.push(InterestingWord {
                        word: word.to_string(),
                        count,
                    });
                }
            }
            break;
        }

        for &(word, count) in &ranked {
            if count == 1 || selected.len() == target {
                break;
            }
            if word.chars().count() >= min_len && admitted.insert(word) {
                selected.push(InterestingWord {
                    word: word.to_string(),
                    count,
                });
            }
        }

        min_len -= 1;
    }

    selected.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_of(pairs: &[(&str, u64)]) -> WordFrequencyModel {
        let mut model = WordFrequencyModel::new();
        for &(word, count) in pairs {
            model.ingest(std::iter::repeat_n(word.to_string(), count as usize));
        }
        model
    }

    #[test]
    fn fewer_words_than_requested_returns_all() {
        // Three singletons, n = 10: every word comes back with count 1,
        // regardless of length.
        let model = model_of(&[("ox", 1), ("cat", 1), ("dog", 1)]);
        let words = select(&model, 10);
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|w| w.count == 1));
    }

    #[test]
    fn long_frequent_words_admitted_first() {
        let model = model_of(&[
            ("extraordinary", 3), // len 13, admitted at threshold 10
            ("cat", 5),           // short, only admitted after fallback
            ("remarkable", 2),    // len 10, admitted at threshold 10
        ]);
        let words = select(&model, 2);
        let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["extraordinary", "remarkable"]);
    }

    #[test]
    fn singletons_only_as_last_resort() {
        // "magnificent" occurs once; even at length 11 it must lose to
        // short repeated words, because every length-filtered scan
        // stops at the singleton block.
        let model = model_of(&[("magnificent", 1), ("cat", 4), ("dog", 3)]);
        let words = select(&model, 2);
        let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["cat", "dog"]);
    }

    #[test]
    fn result_sorted_by_descending_count() {
        let model = model_of(&[("aaaaaaaaaaa", 2), ("bbbbbbbbbbb", 7), ("ccccccccccc", 4)]);
        let words = select(&model, 3);
        let counts: Vec<u64> = words.iter().map(|w| w.count).collect();
        assert_eq!(counts, vec![7, 4, 2]);
    }

    #[test]
    fn threshold_shrinks_until_enough_words() {
        let model = model_of(&[
            ("elephantine", 2), // len 11
            ("seven", 2),       // len 5
            ("of", 2),          // len 2
        ]);
        let words = select(&model, 3);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn zero_requested_or_empty_model() {
        let model = model_of(&[("cat", 2)]);
        assert!(select(&model, 0).is_empty());
        assert!(select(&WordFrequencyModel::new(), 5).is_empty());
    }

    #[test]
    fn no_duplicate_admissions() {
        let model = model_of(&[("longwordhere", 5), ("another", 4)]);
        let words = select(&model, 2);
        assert_eq!(words.len(), 2);
        let unique: HashSet<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(unique.len(), 2);
    }
}
