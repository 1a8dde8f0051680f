//! Core types for Firdaria period calculations.

use crate::planet::Planet;

/// Year length for time-lord period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A minor (sub-)period inside a Firdaria major period.
///
/// Node majors are not subdivided; their single minor has
/// `minor == major` and spans the whole major period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirdariaMinor {
    /// Lord of the enclosing major period.
    pub major: Planet,
    /// Lord of this sub-period.
    pub minor: Planet,
    /// JD, inclusive.
    pub start_jd: f64,
    /// JD, exclusive.
    pub end_jd: f64,
}

impl FirdariaMinor {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the half-open interval `[start, end)` contains `jd`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// A Firdaria major period and its ordered minors.
#[derive(Debug, Clone, PartialEq)]
pub struct FirdariaMajor {
    pub lord: Planet,
    /// JD, inclusive.
    pub start_jd: f64,
    /// JD, exclusive.
    pub end_jd: f64,
    /// 7 equal minors for a planetary lord; exactly 1 for a node.
    pub minors: Vec<FirdariaMinor>,
}

impl FirdariaMajor {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// The full Firdaria cycle from a birth instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FirdariaTimeline {
    /// Sect the sequence was chosen for.
    pub is_day: bool,
    /// Birth JD the cycle starts at.
    pub birth_jd: f64,
    /// The 9 major periods in chronological order.
    pub majors: Vec<FirdariaMajor>,
}

impl FirdariaTimeline {
    /// The minor period active at `jd`, scanning chronologically.
    ///
    /// `None` when `jd` falls before birth or beyond the last major's
    /// end; out-of-horizon queries are a defined outcome, not an error.
    pub fn active(&self, jd: f64) -> Option<&FirdariaMinor> {
        for major in &self.majors {
            if let Some(idx) = super::subperiod::find_active_minor(&major.minors, jd) {
                return Some(&major.minors[idx]);
            }
        }
        None
    }
}
