//! Error types for date parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date parsing or validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY/MM/DD` or `YYYY-MM-DD`.
    Parse(String),
    /// Calendar-invalid date (month out of 1-12, day out of month range).
    InvalidDate(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
