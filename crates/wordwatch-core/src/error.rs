//! Error types for wordwatch-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during an analysis pass.
///
/// All variants are fatal to the pass that raised them: no partial
/// report is produced, and the next file-change trigger is the natural
/// retry opportunity.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A reference word list could not be read.
    #[error("reference list unavailable: {path}: {source}")]
    ResourceUnavailable {
        /// Path of the word-list resource.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Format-specific text extraction failed.
    #[error("extraction failed for {path}: {reason}")]
    ExtractionFailed {
        /// Path of the watched document.
        path: Utf8PathBuf,
        /// What went wrong (IO error, converter exit status, stderr).
        reason: String,
    },

    /// The document exists but could not be parsed by its format reader.
    #[error("malformed document {path}: {reason}")]
    MalformedDocument {
        /// Path of the watched document.
        path: Utf8PathBuf,
        /// Parser or converter diagnostic.
        reason: String,
    },
}

impl AnalysisError {
    /// The pipeline stage that produced this error, for log context.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable { .. } => "word-lists",
            Self::ExtractionFailed { .. } | Self::MalformedDocument { .. } => "extract",
        }
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
