use std::path::Path;

use thiserror::Error;

// Re-export domain types for convenience
pub use mailsift_core::{EmailReport, EmailSet, PdfBackend};

/// Name of the PDF library this build extracts text with.
pub const PDF_CAPABILITY: &str = "mupdf";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Pdf(#[from] mailsift_parsing::ParsingError),
    #[error("{} not installed", PDF_CAPABILITY)]
    NoPdfSupport,
}

/// Resolve the PDF text-extraction backend compiled into this build.
///
/// Fails with [`IngestError::NoPdfSupport`] when built without the `pdf`
/// feature (no mupdf).
#[cfg(feature = "pdf")]
pub fn pdf_backend() -> Result<Box<dyn PdfBackend>, IngestError> {
    Ok(Box::new(mailsift_pdf_mupdf::MupdfBackend::new()))
}

#[cfg(not(feature = "pdf"))]
pub fn pdf_backend() -> Result<Box<dyn PdfBackend>, IngestError> {
    tracing::error!(capability = PDF_CAPABILITY, "PDF support not compiled in");
    Err(IngestError::NoPdfSupport)
}

/// Extract emails with an explicit backend.
pub fn extract_emails_with(
    path: &Path,
    backend: &dyn PdfBackend,
) -> Result<EmailSet, IngestError> {
    tracing::debug!(path = %path.display(), backend = backend.name(), "extracting emails");
    mailsift_parsing::extract_emails(path, backend).map_err(IngestError::Pdf)
}

/// Run the pipeline and fold the outcome into the report printed by the CLI.
///
/// Any document error (missing file, unreadable or corrupt PDF) becomes an
/// [`EmailReport::Failure`] carrying the error text.
pub fn report_for(path: &Path, backend: &dyn PdfBackend) -> EmailReport {
    match extract_emails_with(path, backend) {
        Ok(emails) => EmailReport::from(emails),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "email extraction failed");
            EmailReport::failure(e)
        }
    }
}
