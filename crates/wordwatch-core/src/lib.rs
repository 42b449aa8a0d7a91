//! Core analysis library for wordwatch.
//!
//! Turns raw document bytes into a [`StatisticsReport`]: word counts,
//! vocabulary coverage against reference word lists, paragraph
//! segmentation, and interesting-word extraction. The engine is
//! independent of how it is triggered (the CLI's watch loop) and how
//! reports are published — those live in the `wordwatch` binary crate.
//!
//! # Modules
//!
//! - [`tokenize`] - Word tokenization
//! - [`word_lists`] - Reference word list loaders
//! - [`frequency`] - Word frequency accumulation
//! - [`paragraphs`] - Heading detection and paragraph segmentation
//! - [`coverage`] - Coverage against reference lists
//! - [`interesting`] - Interesting-word selection
//! - [`report`] - The statistics report
//! - [`analysis`] - Pass orchestration
//! - [`extract`] - Format-specific text extraction
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordwatch_core::analysis;
//! use wordwatch_core::word_lists::{CategorizedReferenceList, ReferenceList, ReferenceLists};
//!
//! let lists = ReferenceLists {
//!     vocabulary: ReferenceList::parse("cat\ndog\n"),
//!     fancy: ReferenceList::parse("ephemeral\n"),
//!     academic: CategorizedReferenceList::parse("Verbs\n\trun\n"),
//! };
//! let report = analysis::analyze("## Intro\nthe cat can run", &lists, 10);
//! assert_eq!(report.total_words, 5);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod coverage;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod interesting;
pub mod paragraphs;
pub mod report;
pub mod tokenize;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use report::StatisticsReport;
