//! Paragraph segmentation by heading convention.
//!
//! Documents come in two heading styles: markdown `## ` sections and
//! numbered chapters (`1 Introduction` on its own line, blank lines on
//! both sides). The segmenter first detects which convention the
//! document uses, then splits the body into `(heading, word count)`
//! pairs. Unstructured text detects no convention and yields an empty
//! sequence — the common case, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::tokenize;

/// Regex for numbered-chapter headings: digit, space, then content.
static NUMBERED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d \S").expect("valid regex"));

/// One detected section: its heading text and body word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Heading text with leading `#` characters and whitespace stripped.
    pub heading: String,
    /// Number of tokens strictly between this heading and the next.
    pub word_count: usize,
}

/// Heading convention detected in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingConvention {
    Markdown,
    Numbered,
}

fn detect(lines: &[&str]) -> Option<HeadingConvention> {
    if lines.iter().any(|line| line.starts_with("## ")) {
        return Some(HeadingConvention::Markdown);
    }
    if (1..lines.len().saturating_sub(1)).any(|i| is_numbered_heading(lines, i)) {
        return Some(HeadingConvention::Numbered);
    }
    None
}

/// A numbered heading needs blank lines on both sides, so the first
/// and last lines of a document never qualify.
fn is_numbered_heading(lines: &[&str], i: usize) -> bool {
    i > 0
        && i + 1 < lines.len()
        && NUMBERED_PATTERN.is_match(lines[i].trim())
        && lines[i - 1].trim().is_empty()
        && lines[i + 1].trim().is_empty()
}

fn is_heading(convention: HeadingConvention, lines: &[&str], i: usize) -> bool {
    match convention {
        HeadingConvention::Markdown => lines[i].starts_with("## "),
        HeadingConvention::Numbered => is_numbered_heading(lines, i),
    }
}

fn clean_heading(line: &str) -> String {
    line.trim().trim_start_matches('#').trim().to_string()
}

/// Split a document into `(heading, word count)` paragraphs.
///
/// Text before the first heading belongs to no paragraph; text after
/// the last heading forms the trailing paragraph. Zero detected
/// headings yields an empty sequence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Vec<Paragraph> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(convention) = detect(&lines) else {
        return Vec::new();
    };

    let mut paragraphs = Vec::new();
    let mut current_heading: Option<&str> = None;
    let mut body = String::new();

    for i in 0..lines.len() {
        if is_heading(convention, &lines, i) {
            if let Some(heading) = current_heading {
                paragraphs.push(Paragraph {
                    heading: clean_heading(heading),
                    word_count: tokenize::count_tokens(&body),
                });
            }
            current_heading = Some(lines[i]);
            body.clear();
        } else if current_heading.is_some() {
            body.push_str(lines[i]);
            body.push('\n');
        }
    }

    if let Some(heading) = current_heading {
        paragraphs.push(Paragraph {
            heading: clean_heading(heading),
            word_count: tokenize::count_tokens(&body),
        });
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, usize)> {
        segment(text)
            .into_iter()
            .map(|p| (p.heading, p.word_count))
            .collect()
    }

    #[test]
    fn markdown_sections() {
        assert_eq!(
            pairs("## Intro\nfoo bar\n## Body\nbaz"),
            vec![("Intro".to_string(), 2), ("Body".to_string(), 1)]
        );
    }

    #[test]
    fn trailing_section_counted() {
        let text = "## One\na b c\n## Two\nd e\nf";
        assert_eq!(
            pairs(text),
            vec![("One".to_string(), 3), ("Two".to_string(), 3)]
        );
    }

    #[test]
    fn text_before_first_heading_ignored() {
        let text = "preamble words here\n## First\nbody";
        assert_eq!(pairs(text), vec![("First".to_string(), 1)]);
    }

    #[test]
    fn unstructured_text_yields_nothing() {
        assert!(segment("just some plain prose\nwith no headings at all").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn numbered_chapters_need_blank_neighbors() {
        let text = "title\n\n1 Introduction\n\nsome body text\n\n2 Methods\n\nmore words here now\n";
        assert_eq!(
            pairs(text),
            vec![
                ("1 Introduction".to_string(), 3),
                ("2 Methods".to_string(), 4)
            ]
        );
    }

    #[test]
    fn numbered_line_without_blank_neighbors_is_body() {
        // "1 Introduction" is glued to surrounding text, so no
        // convention is detected at all.
        let text = "title\n1 Introduction\nbody";
        assert!(segment(text).is_empty());
    }

    #[test]
    fn markdown_wins_over_numbered() {
        let text = "## Section\n\n1 Not a chapter\n\nbody";
        let paragraphs = segment(text);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].heading, "Section");
    }

    #[test]
    fn deeper_markdown_levels_are_not_boundaries() {
        // Only "## " starts a section; "###" has no trailing space match.
        let text = "## Top\nalpha\n### nested line\nbeta";
        assert_eq!(pairs(text), vec![("Top".to_string(), 4)]);
    }
}
