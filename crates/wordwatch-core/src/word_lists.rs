//! Reference word list loaders.
//!
//! Two on-disk formats:
//!
//! - Plain list: one word per line, blank lines skipped.
//! - Categorized list: a line *not* starting with a tab begins a new
//!   category; tab-indented lines below it belong to that category.
//!
//! Lists are re-read on every analysis pass so external edits take
//! effect without a restart. Loading is the only fallible step in the
//! analysis pipeline besides extraction.

use std::collections::{BTreeSet, HashMap, HashSet};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{AnalysisError, AnalysisResult};

/// An immutable set of reference words.
#[derive(Debug, Clone)]
pub struct ReferenceList {
    words: HashSet<String>,
}

impl ReferenceList {
    /// Load a plain word list: one word per line, case-normalized,
    /// blank lines skipped.
    pub fn load(path: &Utf8Path) -> AnalysisResult<Self> {
        let content = read_resource(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse plain list content. Split out from [`Self::load`] for tests.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test against a normalized token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate the words in the list.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// A reference list partitioned into labeled categories.
///
/// Quirk preserved from the legacy list format: a category header line
/// is both a label *and* a countable word entry — the header's word is
/// filed under the category seen before it (an empty pseudo-category
/// for the very first header). Coverage totals include these
/// pseudo-entries.
#[derive(Debug, Clone)]
pub struct CategorizedReferenceList {
    /// word → category label it belongs to.
    entries: HashMap<String, String>,
    /// Distinct category labels, in sorted order.
    categories: BTreeSet<String>,
}

impl CategorizedReferenceList {
    /// Load a categorized word list from disk.
    pub fn load(path: &Utf8Path) -> AnalysisResult<Self> {
        let content = read_resource(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse categorized list content.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut categories = BTreeSet::new();
        let mut current = String::new();

        for line in content.lines() {
            let indented = line.starts_with('\t');
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if indented {
                entries.insert(word, current.clone());
            } else {
                // Header: the label itself counts as a word of the
                // previous category, then opens a new one.
                entries.insert(word.clone(), current.clone());
                categories.insert(word.clone());
                current = word;
            }
        }

        Self {
            entries,
            categories,
        }
    }

    /// Total word entries, including category-header pseudo-entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct category labels.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Iterate distinct category labels in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Iterate `(word, category)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), c.as_str()))
    }

    /// Membership test against a normalized token.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

/// Paths to the three reference word lists an analysis pass consumes.
#[derive(Debug, Clone)]
pub struct ListPaths {
    /// General vocabulary list (plain format).
    pub vocabulary: Utf8PathBuf,
    /// Advanced/"fancy" word list (plain format).
    pub fancy: Utf8PathBuf,
    /// Academic word list (categorized format).
    pub academic: Utf8PathBuf,
}

/// The three loaded reference lists, shared read-only within a pass.
#[derive(Debug, Clone)]
pub struct ReferenceLists {
    /// General vocabulary list.
    pub vocabulary: ReferenceList,
    /// Advanced/"fancy" word list.
    pub fancy: ReferenceList,
    /// Categorized academic word list.
    pub academic: CategorizedReferenceList,
}

impl ReferenceLists {
    /// Load all three lists. Each resource is read exactly once per
    /// pass; any unreadable resource aborts the pass.
    #[tracing::instrument(skip_all, fields(vocabulary = %paths.vocabulary))]
    pub fn load(paths: &ListPaths) -> AnalysisResult<Self> {
        Ok(Self {
            vocabulary: ReferenceList::load(&paths.vocabulary)?,
            fancy: ReferenceList::load(&paths.fancy)?,
            academic: CategorizedReferenceList::load(&paths.academic)?,
        })
    }
}

fn read_resource(path: &Utf8Path) -> AnalysisResult<String> {
    std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        AnalysisError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn plain_list_skips_blanks_and_normalizes_case() {
        let list = ReferenceList::parse("Cat\n\n  DOG  \nbird\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("cat"));
        assert!(list.contains("dog"));
        assert!(!list.contains("DOG"));
    }

    #[test]
    fn plain_list_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta").unwrap();
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap();
        let list = ReferenceList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn missing_plain_list_is_resource_unavailable() {
        let err = ReferenceList::load(Utf8Path::new("/no/such/list.txt")).unwrap_err();
        assert!(matches!(err, AnalysisError::ResourceUnavailable { .. }));
        assert_eq!(err.stage(), "word-lists");
    }

    #[test]
    fn categorized_header_belongs_to_previous_category() {
        let list = CategorizedReferenceList::parse("Verbs\n\trun\n\tjump\nNouns\n\tcat\n");
        assert_eq!(list.category_count(), 2);
        // "nouns" is a label, but as a word it is filed under "verbs".
        let entries: HashMap<_, _> = list.entries().collect();
        assert_eq!(entries.get("nouns"), Some(&"verbs"));
        assert_eq!(entries.get("run"), Some(&"verbs"));
        assert_eq!(entries.get("cat"), Some(&"nouns"));
        // First header is filed under the empty pseudo-category.
        assert_eq!(entries.get("verbs"), Some(&""));
    }

    #[test]
    fn categorized_totals_include_header_entries() {
        let list = CategorizedReferenceList::parse("Verbs\n\trun\n\tjump\n");
        // "verbs", "run", "jump"
        assert_eq!(list.len(), 3);
        assert_eq!(list.category_count(), 1);
        assert!(list.contains("verbs"));
    }

    #[test]
    fn categorized_blank_lines_ignored() {
        let list = CategorizedReferenceList::parse("A\n\n\tone\n\t\n\ttwo\n");
        assert_eq!(list.len(), 3);
        assert_eq!(list.category_count(), 1);
    }

    #[test]
    fn load_all_three_lists() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::write(root.join("vocab.txt").as_std_path(), "cat\ndog\n").unwrap();
        std::fs::write(root.join("fancy.txt").as_std_path(), "ephemeral\n").unwrap();
        std::fs::write(root.join("awl.txt").as_std_path(), "Analysis\n\tanalyze\n").unwrap();

        let lists = ReferenceLists::load(&ListPaths {
            vocabulary: root.join("vocab.txt"),
            fancy: root.join("fancy.txt"),
            academic: root.join("awl.txt"),
        })
        .unwrap();
        assert_eq!(lists.vocabulary.len(), 2);
        assert_eq!(lists.fancy.len(), 1);
        assert_eq!(lists.academic.category_count(), 1);
    }
}
