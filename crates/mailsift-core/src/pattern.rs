use once_cell::sync::Lazy;
use regex::Regex;

/// Syntactically plausible email address.
///
/// A local part of `[A-Za-z0-9._%+-]`, an `@`, a host of `[A-Za-z0-9.-]`, and
/// a final dot-separated alphabetic label of at least two letters. Matching
/// is ASCII-only and says nothing about deliverability; this is not an
/// RFC 5322 validator.
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// [`EMAIL_PATTERN`] for searching inside text.
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

static EMAIL_EXACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{EMAIL_PATTERN})$")).unwrap());

/// Whether the whole of `s` is one match of [`EMAIL_PATTERN`].
pub fn is_plausible_email(s: &str) -> bool {
    EMAIL_EXACT_RE.is_match(s)
}
