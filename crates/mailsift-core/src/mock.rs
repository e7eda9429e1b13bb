//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PageText, PdfBackend};

/// A configurable failure for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockFailure {
    /// Simulate a missing file.
    NotFound,
    /// Simulate a document that cannot be opened (not a PDF, encrypted, ...).
    Open(String),
    /// Simulate a corrupt page: the first `after_pages` pages are visited, then
    /// extraction fails.
    Extraction { after_pages: usize, message: String },
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Serves a fixed list of pages (`None` for a page without text) for every
/// path, optionally failing in one of the [`MockFailure`] ways. Calls are
/// counted via [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    pages: Vec<Option<String>>,
    failure: Option<MockFailure>,
    call_count: AtomicUsize,
}

impl MockBackend {
    /// Create a mock whose document has the given pages.
    pub fn with_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|p| p.map(Into::into)).collect(),
            failure: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose document cannot be read.
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            pages: Vec::new(),
            failure: Some(failure),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Keep the pages but fail partway through.
    pub fn fail_after(mut self, after_pages: usize, message: &str) -> Self {
        self.failure = Some(MockFailure::Extraction {
            after_pages,
            message: message.to_string(),
        });
        self
    }

    /// Number of times the document has been opened.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(PageText<'_>),
    ) -> Result<usize, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let fail_at = match &self.failure {
            Some(MockFailure::NotFound) => {
                return Err(BackendError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )));
            }
            Some(MockFailure::Open(message)) => {
                return Err(BackendError::OpenError(message.clone()));
            }
            Some(MockFailure::Extraction {
                after_pages,
                message,
            }) => Some((*after_pages, message)),
            None => None,
        };

        for (index, page) in self.pages.iter().enumerate() {
            if let Some((after_pages, message)) = fail_at
                && index == after_pages
            {
                return Err(BackendError::ExtractionError(message.clone()));
            }
            visit(PageText {
                index,
                text: page.as_deref(),
            });
        }

        if let Some((after_pages, message)) = fail_at
            && after_pages >= self.pages.len()
        {
            return Err(BackendError::ExtractionError(message.clone()));
        }

        Ok(self.pages.len())
    }
}
