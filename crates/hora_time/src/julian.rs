//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Fliegel & Van Flandern (1968) integer algorithm, valid for all
//! Gregorian dates of astrological interest. Dates are taken at 0h UT,
//! so the returned JD carries a `.5` fraction.

/// Julian Date of the Gregorian calendar date at 0h UT.
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;

    let jdn = d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045;
    jdn as f64 - 0.5
}

/// Gregorian calendar date (at 0h UT) of a Julian Date.
///
/// The JD is rounded to the nearest 0h-UT day number first, so any time
/// of day within the civil day maps back to that day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, u32) {
    let jdn = (jd + 0.5).floor() as i64;

    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as u32)
}
