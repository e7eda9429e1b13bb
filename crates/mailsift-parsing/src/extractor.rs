use std::borrow::Cow;
use std::path::Path;

use crate::config::EmailParsingConfig;
use crate::{pattern, text_processing};
use crate::{EmailSet, ParsingError, PdfBackend};

/// Counters gathered over one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Pages the backend visited.
    pub pages: usize,
    /// Pages that produced non-empty text.
    pub pages_with_text: usize,
    /// Raw pattern matches, before deduplication.
    pub matches: usize,
}

/// A configurable email extraction pipeline.
///
/// Holds an [`EmailParsingConfig`] and exposes each pipeline step as a method.
/// The default constructor uses built-in defaults; use [`EmailExtractor::with_config`]
/// to disable ligature expansion. The email pattern itself is fixed.
pub struct EmailExtractor {
    config: EmailParsingConfig,
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: EmailParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: EmailParsingConfig) -> Self {
        Self { config }
    }

    /// Scan one block of text and add every normalized match to `emails`.
    ///
    /// Returns the number of raw matches (duplicates included).
    pub fn scan_text(&self, text: &str, emails: &mut EmailSet) -> usize {
        let text = if self.config.expand_ligatures() {
            text_processing::expand_ligatures(text)
        } else {
            Cow::Borrowed(text)
        };

        let mut matches = 0;
        for candidate in pattern::find_emails(&text) {
            emails.insert(candidate);
            matches += 1;
        }
        matches
    }

    /// Run the matching and normalization steps on already-extracted text.
    pub fn extract_from_text(&self, text: &str) -> EmailSet {
        let mut emails = EmailSet::new();
        self.scan_text(text, &mut emails);
        emails
    }

    /// Run the full pipeline on a PDF, returning the emails and per-run counters.
    ///
    /// Pages are processed one at a time in document order; pages with no
    /// text are skipped. Any backend error discards everything collected so far.
    pub fn extract_with_stats(
        &self,
        pdf_path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<(EmailSet, ExtractionStats), ParsingError> {
        let mut emails = EmailSet::new();
        let mut stats = ExtractionStats::default();

        let pages = backend.for_each_page(pdf_path, &mut |page| {
            let Some(text) = page.non_empty() else {
                tracing::debug!(page = page.index + 1, "no extractable text");
                return;
            };
            stats.pages_with_text += 1;
            let found = self.scan_text(text, &mut emails);
            stats.matches += found;
            tracing::debug!(page = page.index + 1, matches = found, "scanned page");
        })?;
        stats.pages = pages;

        if stats.pages > 0 && stats.pages_with_text == 0 {
            tracing::warn!(
                path = %pdf_path.display(),
                pages = stats.pages,
                "document has no extractable text"
            );
        }

        tracing::info!(
            path = %pdf_path.display(),
            backend = backend.name(),
            pages = stats.pages,
            matches = stats.matches,
            unique = emails.len(),
            "email extraction complete"
        );

        Ok((emails, stats))
    }

    /// Run the full pipeline on a PDF file.
    pub fn extract_emails_via_backend(
        &self,
        pdf_path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<EmailSet, ParsingError> {
        self.extract_with_stats(pdf_path, backend)
            .map(|(emails, _)| emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmailParsingConfigBuilder;

    #[test]
    fn test_extract_from_text_normalizes() {
        let emails = EmailExtractor::new().extract_from_text("Foo@Bar.COM and foo@bar.com");
        assert_eq!(emails.into_vec(), vec!["foo@bar.com"]);
    }

    #[test]
    fn test_scan_text_counts_raw_matches() {
        let mut emails = EmailSet::new();
        let n = EmailExtractor::new().scan_text("a@x.io A@X.IO b@x.io", &mut emails);
        assert_eq!(n, 3);
        assert_eq!(emails.len(), 2);
    }

    #[test]
    fn test_ligatures_expanded_by_default() {
        let emails = EmailExtractor::new().extract_from_text("Write to oﬃce@ﬁrm.com");
        assert_eq!(emails.into_vec(), vec!["office@firm.com"]);
    }

    #[test]
    fn test_ligature_expansion_disabled() {
        let config = EmailParsingConfigBuilder::new()
            .expand_ligatures(false)
            .build();
        let emails = EmailExtractor::with_config(config).extract_from_text("info@ﬁrm.com");
        // The ligature glyph is outside the host character class.
        assert!(emails.is_empty());
    }

    #[test]
    fn test_extracted_entries_are_whole_pattern_matches() {
        let anchored = regex::Regex::new(&format!("^{}$", crate::EMAIL_PATTERN)).unwrap();
        let emails = EmailExtractor::new().extract_from_text(
            "Call Me Maybe\nContact: alice@example.com or BOB@EXAMPLE.COM, \
             not-an-email @missing-local.com user@nodot a.b@c.org.",
        );

        assert_eq!(
            emails.clone().into_vec(),
            vec!["a.b@c.org", "alice@example.com", "bob@example.com"]
        );
        for email in emails.iter() {
            assert!(anchored.is_match(email), "{email:?} escapes the email pattern");
        }
    }
}
