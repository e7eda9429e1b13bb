use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod mock;
pub mod pattern;

// Re-export for convenience
pub use backend::{BackendError, PageText, PdfBackend};
pub use mock::{MockBackend, MockFailure};
pub use pattern::{EMAIL_PATTERN, EMAIL_RE, is_plausible_email};

/// A deduplicated set of normalized email addresses.
///
/// Every entry is lowercase with no surrounding whitespace and is a whole
/// match of [`EMAIL_PATTERN`]. [`insert`](Self::insert) normalizes before
/// storing, so two candidates that differ only in case or incidental
/// whitespace collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSet {
    emails: BTreeSet<String>,
}

impl EmailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a matched candidate: lowercase, then trim surrounding whitespace.
    pub fn normalize(candidate: &str) -> String {
        candidate.to_lowercase().trim().to_string()
    }

    /// Insert a candidate in normalized form.
    ///
    /// Returns `true` if it was stored. Candidates that are already present,
    /// or that do not fully match [`EMAIL_PATTERN`] once normalized, are
    /// dropped.
    pub fn insert(&mut self, candidate: &str) -> bool {
        let email = Self::normalize(candidate);
        if !is_plausible_email(&email) {
            return false;
        }
        self.emails.insert(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.emails.into_iter().collect()
    }
}

impl<'a> Extend<&'a str> for EmailSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

impl<'a> FromIterator<&'a str> for EmailSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = EmailSet::new();
        set.extend(iter);
        set
    }
}

/// The single outcome a run reports.
///
/// Serializes to exactly one of:
/// - `{"success":true,"emails":[...]}`
/// - `{"success":false,"error":"..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireReport", try_from = "WireReport")]
pub enum EmailReport {
    Success { emails: Vec<String> },
    Failure { error: String },
}

impl EmailReport {
    pub fn failure(error: impl fmt::Display) -> Self {
        EmailReport::Failure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EmailReport::Success { .. })
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse one line of output produced by [`to_json_line`](Self::to_json_line).
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line.trim())
    }

    /// Collapse into the emails on success or the error message on failure.
    pub fn into_result(self) -> Result<Vec<String>, String> {
        match self {
            EmailReport::Success { emails } => Ok(emails),
            EmailReport::Failure { error } => Err(error),
        }
    }
}

impl From<EmailSet> for EmailReport {
    fn from(set: EmailSet) -> Self {
        EmailReport::Success {
            emails: set.into_vec(),
        }
    }
}

/// Flat on-the-wire shape shared by both report variants.
#[derive(Serialize, Deserialize)]
struct WireReport {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<EmailReport> for WireReport {
    fn from(report: EmailReport) -> Self {
        match report {
            EmailReport::Success { emails } => WireReport {
                success: true,
                emails: Some(emails),
                error: None,
            },
            EmailReport::Failure { error } => WireReport {
                success: false,
                emails: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireReport> for EmailReport {
    type Error = String;

    fn try_from(wire: WireReport) -> Result<Self, Self::Error> {
        match (wire.success, wire.emails, wire.error) {
            (true, Some(emails), None) => Ok(EmailReport::Success { emails }),
            (false, None, Some(error)) => Ok(EmailReport::Failure { error }),
            (true, _, _) => Err("success report must carry `emails` and no `error`".into()),
            (false, _, _) => Err("failure report must carry `error` and no `emails`".into()),
        }
    }
}
