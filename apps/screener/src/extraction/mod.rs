//! Text extraction: turns an uploaded resume into plain text.
//!
//! Failures never propagate: a corrupt or unreadable file yields
//! `ExtractionOutcome::Failed`, which downstream scoring treats as empty text.

pub mod docx;
pub mod pdf;

use std::path::PathBuf;

use bytes::Bytes;
use tracing::warn;

/// File type inferred from the uploaded filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Case-insensitive suffix match. Legacy `.doc` goes through the DOCX reader
    /// and fails there unless the file is actually OOXML.
    pub fn from_file_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Extracted(String),
    Failed { reason: String },
    Unsupported,
}

impl ExtractionOutcome {
    /// Extracted text, or the empty string for failed and unsupported files.
    pub fn text(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted(text) => text,
            _ => "",
        }
    }
}

/// A saved upload together with what could be read from it.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub outcome: ExtractionOutcome,
}

/// Extracts the text of an upload according to `kind`. `label` only
/// identifies the file in logs.
///
/// Parsing runs on the blocking pool; a panic inside the parser is absorbed
/// as a failure like any other parse error.
pub async fn extract(bytes: Bytes, kind: DocumentKind, label: &str) -> ExtractionOutcome {
    let parsed = match kind {
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || pdf::extract(&bytes)).await,
        DocumentKind::Docx => tokio::task::spawn_blocking(move || docx::extract(&bytes)).await,
        DocumentKind::Unsupported => return ExtractionOutcome::Unsupported,
    };

    let reason = match parsed {
        Ok(Ok(text)) => return ExtractionOutcome::Extracted(text),
        Ok(Err(e)) => format!("{e:#}"),
        Err(join_error) if join_error.is_panic() => "parser panicked".to_string(),
        Err(join_error) => join_error.to_string(),
    };
    warn!(file = %label, kind = ?kind, "Text extraction failed: {reason}");
    ExtractionOutcome::Failed { reason }
}
