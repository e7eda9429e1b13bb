use std::path::Path;

use thiserror::Error;

pub mod config;
pub mod extractor;
pub mod pattern;
pub mod text_processing;

pub use config::{EmailParsingConfig, EmailParsingConfigBuilder};
pub use extractor::{EmailExtractor, ExtractionStats};
pub use pattern::find_emails;
// Re-export domain types from core (canonical definitions live there)
pub use mailsift_core::{BackendError, EMAIL_PATTERN, EmailReport, EmailSet, PageText, PdfBackend};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error(transparent)]
    Backend(#[from] mailsift_core::BackendError),
}

/// Extract email addresses from a PDF file using the given backend for text extraction.
///
/// Pipeline:
/// 1. Open the PDF via `backend` and visit each page in order
/// 2. Skip pages without extractable text
/// 3. Match every email-like substring on the page
/// 4. Lowercase and trim each match into the result set
pub fn extract_emails(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
) -> Result<EmailSet, ParsingError> {
    EmailExtractor::new().extract_emails_via_backend(pdf_path, backend)
}
