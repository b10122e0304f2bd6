//! Error types for the lopdf-report library

use thiserror::Error;

/// Result type alias using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur when composing reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Configured page geometry cannot hold the fixed report regions.
    /// Fatal at configuration time; no render may proceed.
    #[error("Invalid page geometry: {0}")]
    GeometryViolation(String),

    /// Content is taller than the single-page body region. The caller
    /// must split the content across renders, one per page.
    #[error("Content height {required:.1}pt exceeds body region {available:.1}pt")]
    ContentOverflow { required: f32, available: f32 },

    /// Report identity is missing a required field
    #[error("Invalid report identity: {0}")]
    InvalidIdentity(String),

    /// Structurally invalid body content (e.g. a ragged table)
    #[error("Invalid report content: {0}")]
    InvalidContent(String),

    /// Font parsing or measurement error
    #[error("Font error: {0}")]
    FontError(String),

    /// The document's page tree is missing or malformed
    #[error("Invalid document structure: {0}")]
    DocumentError(String),
}
