use mailsift_core::EMAIL_RE;

/// Find every match of [`EMAIL_PATTERN`](crate::EMAIL_PATTERN) in `text`,
/// left to right, non-overlapping.
///
/// Matches are returned as they appear in the text, before normalization.
pub fn find_emails(text: &str) -> impl Iterator<Item = &str> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str())
}
