//! Word frequency accumulation.

use std::collections::HashMap;

/// Accumulates token occurrence counts over a single analysis pass.
///
/// A fresh model is built for every pass; nothing is shared between
/// passes.
///
/// The running average word length uses the legacy recurrence
/// `avg = (avg + len) / 2` — a decaying average in which later tokens
/// dominate exponentially, not an arithmetic mean. Kept bit-for-bit for
/// report compatibility; do not "fix" it without flagging the change.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyModel {
    counts: HashMap<String, u64>,
    total: u64,
    avg_len: f64,
}

impl WordFrequencyModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a stream of normalized tokens.
    pub fn ingest<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            let len = token.chars().count() as f64;
            *self.counts.entry(token).or_insert(0) += 1;
            self.total += 1;
            self.avg_len = if self.total == 1 {
                len
            } else {
                (self.avg_len + len) / 2.0
            };
        }
    }

    /// Total number of tokens ingested (with repetition).
    pub const fn total_words(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens seen.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Decaying running average token length (see type docs).
    pub const fn average_word_length(&self) -> f64 {
        self.avg_len
    }

    /// Occurrence count for a token, 0 if never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Iterate `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Iterate the distinct vocabulary.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
