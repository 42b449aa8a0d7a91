//! Vocabulary coverage against reference word lists.
//!
//! Coverage is set-intersection only: how many reference words appear
//! in the document's distinct vocabulary. Occurrence counts on either
//! side never inflate the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::frequency::WordFrequencyModel;
use crate::word_lists::{CategorizedReferenceList, ReferenceList};

/// Coverage of a plain reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    /// Size of the reference list.
    pub total: usize,
    /// Reference words found in the document vocabulary.
    pub hits: usize,
}

/// Coverage of a categorized reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedCoverage {
    /// Entry count, including category-label pseudo-entries.
    pub words_total: usize,
    /// Entries found in the document vocabulary.
    pub words_hits: usize,
    /// Number of distinct category labels.
    pub category_total: usize,
    /// Categories with at least one member hit.
    pub category_hits: usize,
    /// Hit count per category label (0 entries included).
    pub per_category: BTreeMap<String, usize>,
}

/// Compute plain-list coverage against a pass's vocabulary.
pub fn coverage(list: &ReferenceList, model: &WordFrequencyModel) -> Coverage {
    let hits = list.words().filter(|w| model.count(w) > 0).count();
    Coverage {
        total: list.len(),
        hits,
    }
}

/// Compute categorized-list coverage against a pass's vocabulary.
pub fn categorized_coverage(
    list: &CategorizedReferenceList,
    model: &WordFrequencyModel,
) -> CategorizedCoverage {
    let mut per_category: BTreeMap<String, usize> =
        list.categories().map(|c| (c.to_string(), 0)).collect();

    let mut words_hits = 0;
    for (word, category) in list.entries() {
        if model.count(word) > 0 {
            words_hits += 1;
            // The first header's pseudo-category has no label entry.
            if let Some(count) = per_category.get_mut(category) {
                *count += 1;
            }
        }
    }

    let category_hits = per_category.values().filter(|&&c| c > 0).count();

    CategorizedCoverage {
        words_total: list.len(),
        words_hits,
        category_total: list.category_count(),
        category_hits,
        per_category,
    }
}
