use std::path::Path;

use mupdf::{Document, TextPageFlags};

use mailsift_core::{BackendError, PageText, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it.
///
/// Text is assembled per page by walking MuPDF's structured-text blocks and
/// lines, one line of output per text line. A page whose structured text has
/// no lines (typically a scanned image) is reported as having no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn name(&self) -> &'static str {
        "mupdf"
    }

    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(PageText<'_>),
    ) -> Result<usize, BackendError> {
        // Surface missing/unreadable files as I/O errors rather than MuPDF's
        // generic open failure.
        std::fs::File::open(path)?;

        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        // Dropped on every return path below, releasing the document.
        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut visited = 0;
        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    page_text.extend(line.chars().map(|c| c.char().unwrap_or('\u{FFFD}')));
                    page_text.push('\n');
                }
            }

            visit(PageText {
                index: visited,
                text: (!page_text.is_empty()).then_some(page_text.as_str()),
            });
            visited += 1;
        }

        Ok(visited)
    }
}
