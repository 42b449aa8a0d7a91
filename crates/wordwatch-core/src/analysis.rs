//! Pass orchestration.
//!
//! A pass is one complete run of the pipeline for a single
//! document-change event: extract text, load reference lists, tokenize
//! and accumulate frequencies, segment paragraphs, compute coverage,
//! select interesting words, and assemble the report. Passes are
//! strictly sequential and single-threaded; a pass either completes
//! with a report or fails atomically with no partial output.

use camino::Utf8Path;

use crate::coverage;
use crate::error::AnalysisResult;
use crate::extract;
use crate::frequency::WordFrequencyModel;
use crate::interesting;
use crate::paragraphs;
use crate::report::StatisticsReport;
use crate::tokenize;
use crate::word_lists::{ListPaths, ReferenceLists};

/// Analyze already-extracted text against loaded reference lists.
///
/// Pure aggregation over the pipeline components; infallible once its
/// inputs exist.
#[tracing::instrument(skip_all, fields(text_len = text.len(), top_n))]
pub fn analyze(text: &str, lists: &ReferenceLists, top_n: usize) -> StatisticsReport {
    let mut model = WordFrequencyModel::new();
    model.ingest(tokenize::tokenize(text));

    // The segmenter re-tokenizes per paragraph from the same raw text.
    let paragraphs = paragraphs::segment(text);

    let vocabulary_coverage = coverage::coverage(&lists.vocabulary, &model);
    let fancy_coverage = coverage::coverage(&lists.fancy, &model);
    let academic_coverage = coverage::categorized_coverage(&lists.academic, &model);
    let interesting_words = interesting::select(&model, top_n);

    let report = StatisticsReport {
        total_words: model.total_words(),
        different_words: model.distinct_words(),
        average_word_length: model.average_word_length(),
        paragraphs,
        interesting_words,
        vocabulary_coverage,
        fancy_coverage,
        academic_coverage,
    };
    tracing::debug!(
        total_words = report.total_words,
        different_words = report.different_words,
        paragraphs = report.paragraphs.len(),
        "analysis complete"
    );
    report
}

/// Run one full analysis pass over a document on disk.
///
/// Reference lists are re-read on every pass so external list edits
/// take effect at the next trigger.
#[tracing::instrument(skip(list_paths), fields(document = %document))]
pub fn run_pass(
    document: &Utf8Path,
    list_paths: &ListPaths,
    top_n: usize,
) -> AnalysisResult<StatisticsReport> {
    let text = extract::extract(document)?;
    let lists = ReferenceLists::load(list_paths)?;
    Ok(analyze(&text, &lists, top_n))
}
