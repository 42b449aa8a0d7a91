//! Analyze command — one-shot analysis pass.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};
use wordwatch_core::{Config, StatisticsReport, analysis};

use crate::publish::{ReportSink, sink_for};

use super::ListArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Document to analyze (.txt/.md, .docx, or .pdf).
    pub file: Utf8PathBuf,

    /// How many interesting words to report.
    #[arg(long)]
    pub top: Option<usize>,

    /// Also publish the report to the configured endpoint.
    #[arg(long)]
    pub publish: bool,

    #[command(flatten)]
    pub lists: ListArgs,
}

/// Run one analysis pass over a document and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, "executing analyze command");

    let list_paths = args.lists.resolve(config)?;
    let top_n = args.top.unwrap_or(config.interesting_words);

    let report = analysis::run_pass(&args.file, &list_paths, top_n)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if args.publish {
        let sink = sink_for(config.endpoint.as_deref())?;
        sink.publish(&report)?;
        if config.endpoint.is_none() {
            // StdoutSink already printed the report; nothing more to do.
            return Ok(());
        }
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args.file, &report);
    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &StatisticsReport) {
    println!("{}", file.bold());

    println!(
        "\n  {} {} total, {} distinct, avg length {:.2}",
        "Words:".cyan(),
        report.total_words,
        report.different_words,
        report.average_word_length,
    );

    if !report.paragraphs.is_empty() {
        println!("\n  {}", "Paragraphs:".cyan());
        for paragraph in &report.paragraphs {
            println!("    {} — {} words", paragraph.heading, paragraph.word_count);
        }
    }

    if !report.interesting_words.is_empty() {
        let top: Vec<_> = report
            .interesting_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        println!("\n  {} {}", "Interesting:".cyan(), top.join(", "));
    }

    println!(
        "\n  {} vocabulary {}/{}, fancy {}/{}",
        "Coverage:".cyan(),
        report.vocabulary_coverage.hits,
        report.vocabulary_coverage.total,
        report.fancy_coverage.hits,
        report.fancy_coverage.total,
    );
    println!(
        "  {} {}/{} words, {}/{} categories",
        "Academic:".cyan(),
        report.academic_coverage.words_hits,
        report.academic_coverage.words_total,
        report.academic_coverage.category_hits,
        report.academic_coverage.category_total,
    );
}
