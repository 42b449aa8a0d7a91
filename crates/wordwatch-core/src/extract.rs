//! Format-specific text extraction.
//!
//! The analysis pipeline only ever sees plain text; this module turns
//! a document path into that text. Dispatch is by file extension:
//! `.docx` goes through an external `pandoc` conversion, `.pdf`
//! through `pdftotext`, and everything else is read as plain text.
//! Converter processes are external collaborators — a non-zero exit or
//! garbled output fails the pass, never the watch loop.

use std::process::Command;

use camino::Utf8Path;

use crate::error::{AnalysisError, AnalysisResult};

/// Document format variants dispatched through [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain text, read directly.
    PlainText,
    /// Word-processor document, converted via `pandoc`.
    WordProcessor,
    /// PDF, converted via `pdftotext`.
    Pdf,
}

impl DocumentFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("docx") => Self::WordProcessor,
            Some("pdf") => Self::Pdf,
            _ => Self::PlainText,
        }
    }
}

/// Extract the full text of a document.
#[tracing::instrument(fields(format = ?DocumentFormat::from_path(path)))]
pub fn extract(path: &Utf8Path) -> AnalysisResult<String> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::PlainText => {
            std::fs::read_to_string(path.as_std_path()).map_err(|e| {
                AnalysisError::ExtractionFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })
        }
        DocumentFormat::Pdf => pdf_to_text(path),
        DocumentFormat::WordProcessor => docx_to_text(path),
    }
}

fn pdf_to_text(path: &Utf8Path) -> AnalysisResult<String> {
    let output = Command::new("pdftotext")
        .arg(path.as_str())
        .arg("-")
        .output()
        .map_err(|e| AnalysisError::ExtractionFailed {
            path: path.to_path_buf(),
            reason: format!("failed to run pdftotext: {e}"),
        })?;

    if !output.status.success() {
        return Err(AnalysisError::ExtractionFailed {
            path: path.to_path_buf(),
            reason: format!(
                "pdftotext exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| AnalysisError::MalformedDocument {
        path: path.to_path_buf(),
        reason: format!("pdftotext produced non-UTF-8 output: {e}"),
    })
}

fn docx_to_text(path: &Utf8Path) -> AnalysisResult<String> {
    let output = Command::new("pandoc")
        .arg("--to=plain")
        .arg(path.as_str())
        .output()
        .map_err(|e| AnalysisError::MalformedDocument {
            path: path.to_path_buf(),
            reason: format!("failed to run pandoc: {e}"),
        })?;

    if !output.status.success() {
        return Err(AnalysisError::MalformedDocument {
            path: path.to_path_buf(),
            reason: format!(
                "pandoc exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| AnalysisError::MalformedDocument {
        path: path.to_path_buf(),
        reason: format!("pandoc produced non-UTF-8 output: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn format_dispatch_by_extension() {
        assert_eq!(
            DocumentFormat::from_path(Utf8Path::new("notes.txt")),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_path(Utf8Path::new("thesis.docx")),
            DocumentFormat::WordProcessor
        );
        assert_eq!(
            DocumentFormat::from_path(Utf8Path::new("paper.PDF")),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Utf8Path::new("no_extension")),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn plain_text_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let doc = root.join("doc.md");
        std::fs::write(doc.as_std_path(), "hello words").unwrap();
        assert_eq!(extract(&doc).unwrap(), "hello words");
    }

    #[test]
    fn missing_plain_file_is_extraction_failed() {
        let err = extract(Utf8Path::new("/no/such/doc.txt")).unwrap_err();
        assert!(matches!(err, AnalysisError::ExtractionFailed { .. }));
        assert_eq!(err.stage(), "extract");
    }
}
