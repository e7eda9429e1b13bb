use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Text produced for one page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageText<'a> {
    /// 0-based position in document order.
    pub index: usize,
    /// `None` when the page has no extractable text (e.g. a scanned image).
    pub text: Option<&'a str>,
}

impl<'a> PageText<'a> {
    /// The page text, or `None` if absent or empty.
    pub fn non_empty(&self) -> Option<&'a str> {
        self.text.filter(|t| !t.is_empty())
    }
}

/// Trait for PDF text extraction backends.
///
/// Implementors open the document, visit its pages strictly in order, and
/// release the document before returning, whether or not extraction
/// succeeded. Each page's text is only borrowed for the duration of the
/// `visit` call.
pub trait PdfBackend: Send + Sync {
    /// Name of the library doing the extraction, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Open `path` and pass every page's text to `visit` in document order.
    ///
    /// Returns the number of pages visited.
    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(PageText<'_>),
    ) -> Result<usize, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_filters_blank_pages() {
        let page = PageText {
            index: 0,
            text: Some(""),
        };
        assert_eq!(page.non_empty(), None);

        let page = PageText {
            index: 1,
            text: None,
        };
        assert_eq!(page.non_empty(), None);

        let page = PageText {
            index: 2,
            text: Some("hello"),
        };
        assert_eq!(page.non_empty(), Some("hello"));
    }

    #[test]
    fn test_io_error_message_is_transparent() {
        let err = BackendError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert_eq!(err.to_string(), "No such file or directory");
    }
}
