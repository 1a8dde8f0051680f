//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hora_time::TimeError;

/// Errors from chart input validation and date handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HoraError {
    /// Error from date parsing or validation.
    Time(TimeError),
    /// Ecliptic longitude outside [0, 360) or non-finite.
    InvalidLongitude(f64),
    /// Malformed chart input (wrong bodies, duplicates).
    InvalidInput(&'static str),
}

impl Display for HoraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLongitude(lon) => {
                write!(f, "longitude {lon} outside [0, 360)")
            }
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for HoraError {}

impl From<TimeError> for HoraError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
