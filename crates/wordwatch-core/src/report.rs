//! The statistics report handed to publish sinks.

use serde::{Deserialize, Serialize};

use crate::coverage::{CategorizedCoverage, Coverage};
use crate::interesting::InterestingWord;
use crate::paragraphs::Paragraph;

/// Immutable snapshot of one analysis pass.
///
/// Built fresh on every pass and self-consistent by construction:
/// `different_words` equals the frequency model's distinct key count,
/// and every coverage hit count is bounded by its list total. This is
/// the only value that crosses the core/collaborator boundary — sinks
/// serialize it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Total token count, with repetition.
    pub total_words: u64,
    /// Distinct token count.
    pub different_words: usize,
    /// Decaying running average token length (legacy recurrence).
    pub average_word_length: f64,
    /// Detected sections in document order.
    pub paragraphs: Vec<Paragraph>,
    /// Top interesting words, descending by count.
    pub interesting_words: Vec<InterestingWord>,
    /// Coverage of the general vocabulary list.
    pub vocabulary_coverage: Coverage,
    /// Coverage of the advanced word list.
    pub fancy_coverage: Coverage,
    /// Coverage of the categorized academic word list.
    pub academic_coverage: CategorizedCoverage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> StatisticsReport {
        StatisticsReport {
            total_words: 4,
            different_words: 3,
            average_word_length: 2.25,
            paragraphs: vec![Paragraph {
                heading: "Intro".to_string(),
                word_count: 2,
            }],
            interesting_words: vec![InterestingWord {
                word: "cat".to_string(),
                count: 2,
            }],
            vocabulary_coverage: Coverage { total: 3, hits: 1 },
            fancy_coverage: Coverage { total: 1, hits: 0 },
            academic_coverage: CategorizedCoverage {
                words_total: 3,
                words_hits: 1,
                category_total: 1,
                category_hits: 1,
                per_category: BTreeMap::from([("verbs".to_string(), 1)]),
            },
        }
    }

    #[test]
    fn json_round_trip() {
        let report = sample();
        let json = serde_json::to_string(&report).unwrap();
        let back: StatisticsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn json_field_names_are_stable() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("total_words").is_some());
        assert!(json.get("different_words").is_some());
        assert!(json.get("average_word_length").is_some());
        assert!(json.get("interesting_words").is_some());
        assert!(json["academic_coverage"].get("per_category").is_some());
    }
}
