//! Civil calendar date with validation and string parsing.
//!
//! `CivilDate` is the canonical date representation used for birth dates
//! and time-lord query dates. Both `YYYY/MM/DD` and `YYYY-MM-DD` forms
//! parse; the date is validated against the Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Days per month in a non-leap year, index 0 = January.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month of a given year.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

impl CivilDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if month < 1 || month > 12 {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Date of this date at 0h UT.
    pub fn to_jd(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day)
    }

    /// Civil date containing the given Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day) = jd_to_calendar(jd);
        Self { year, month, day }
    }

    /// Lexicographic (month, day) pair, for birthday comparisons.
    pub const fn month_day(self) -> (u32, u32) {
        (self.month, self.day)
    }

    /// Today's UTC calendar date from the system clock.
    pub fn today() -> Self {
        // Unix epoch 1970-01-01T00:00Z is JD 2440587.5.
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self::from_jd(2440587.5 + secs / 86_400.0)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY/MM/DD` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let sep = if s.contains('/') { '/' } else { '-' };
        let mut parts = s.split(sep);

        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(|| TimeError::Parse(s.to_string()))?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| TimeError::Parse(s.to_string()))?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| TimeError::Parse(s.to_string()))?;
        if parts.next().is_some() {
            return Err(TimeError::Parse(s.to_string()));
        }

        Self::new(year, month, day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slash_form() {
        let d: CivilDate = "1990/07/23".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 7, 23).unwrap());
    }

    #[test]
    fn parse_dash_form() {
        let d: CivilDate = "1990-07-23".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 7, 23).unwrap());
    }

    #[test]
    fn parse_trims_whitespace() {
        let d: CivilDate = " 2000/01/01 ".parse().unwrap();
        assert_eq!(d, CivilDate::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn reject_garbage() {
        assert!("not-a-date".parse::<CivilDate>().is_err());
        assert!("1990/07".parse::<CivilDate>().is_err());
        assert!("1990/07/23/5".parse::<CivilDate>().is_err());
    }

    #[test]
    fn reject_invalid_month() {
        assert_eq!(
            CivilDate::new(2000, 13, 1),
            Err(TimeError::InvalidDate("month must be 1-12"))
        );
    }

    #[test]
    fn reject_invalid_day() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2000, 4, 31).is_err());
    }

    #[test]
    fn jd_roundtrip() {
        let d = CivilDate::new(1985, 11, 5).unwrap();
        assert_eq!(CivilDate::from_jd(d.to_jd()), d);
    }

    #[test]
    fn ordering_follows_calendar() {
        let a = CivilDate::new(1990, 7, 23).unwrap();
        let b = CivilDate::new(1990, 8, 1).unwrap();
        assert!(a < b);
        assert!(a.month_day() < b.month_day());
    }
}
