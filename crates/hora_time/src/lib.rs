//! Civil calendar dates and Julian Date conversion.
//!
//! This crate provides:
//! - `CivilDate`, the calendar-date type used for birth and query dates
//! - Julian Date ↔ calendar conversions (proleptic Gregorian, 0h UT)
//! - Parsing of `YYYY/MM/DD` and `YYYY-MM-DD` date strings

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDate;
pub use error::TimeError;
pub use julian::{calendar_to_jd, jd_to_calendar};
