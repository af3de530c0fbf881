//! Attendance record types.
//!
//! A [`Record`] is created once, from a [`Submission`] whose `name` and `role`
//! are non-empty after trimming, and is never mutated afterwards.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{Result, VahterError};

/// Wire/display format of a record timestamp. Zero-padded and fixed-width, so
/// string order equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Server-assigned acceptance time, `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Parse a timestamp string, rejecting anything not in the fixed format.
    pub fn parse(s: &str) -> Result<Self> {
        let dt = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map_err(|e| VahterError::BadRequest(format!("invalid timestamp {s:?}: {e}")))?;
        let ts = Self::from_naive(dt);
        // chrono accepts non-padded fields; the canonical form must round-trip.
        if ts.0 != s {
            return Err(VahterError::BadRequest(format!(
                "timestamp {s:?} is not zero-padded"
            )));
        }
        Ok(ts)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored attendance entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: Timestamp,
    pub name: String,
    pub role: String,
    pub note: String,
}

/// Unicode whitespace, plus the ASCII separators `U+001C..=U+001F`.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip [`is_blank_char`] characters from both ends.
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank_char)
}

/// Raw form input. Absent fields are empty strings.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub name: String,
    pub role: String,
    pub note: String,
}

impl Submission {
    pub fn new(name: impl Into<String>, role: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            note: note.into(),
        }
    }

    /// Trim all fields; `None` when `name` or `role` is blank.
    pub fn normalize(&self) -> Option<(String, String, String)> {
        let name = trim_blank(&self.name);
        let role = trim_blank(&self.role);
        if name.is_empty() || role.is_empty() {
            return None;
        }
        Some((name.to_string(), role.to_string(), trim_blank(&self.note).to_string()))
    }
}

/// Result of a submission attempt. Neither variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl Outcome {
    /// Metric label value.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Accepted => "success",
            Outcome::Rejected => "rejected",
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}
