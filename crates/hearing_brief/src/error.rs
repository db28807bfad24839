//! Error type for brief generation.

use thiserror::Error;

/// Failures that can escape [`crate::brief::render_brief`].
///
/// Layout overflow is not an error: the generator drops or truncates
/// content and always produces a two-page document.  Malformed country
/// records are a caller precondition, not validated here.
#[derive(Debug, Error)]
pub enum BriefError {
    /// Font registration or document assembly failed in the PDF backend.
    #[error("pdf backend error: {0}")]
    Pdf(#[from] printpdf::errors::Error),
    /// Writing the finished brief to disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
