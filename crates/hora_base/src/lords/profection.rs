//! Annual profections: one sign per year of age from the natal ascendant.

use hora_time::CivilDate;

use crate::planet::Planet;
use crate::sign::Sign;

/// Profection summary for a given age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profection {
    /// Completed years of age at the reference date.
    pub age: i32,
    /// Sign the ascendant has profected to.
    pub sign: Sign,
    /// Profected house, always `(age mod 12) + 1`.
    pub house: u8,
    /// Lord of the year: domicile ruler of the profected sign.
    pub lord: Planet,
}

/// Completed years of age at `on`, decremented if the birthday has not
/// yet been reached that year.
pub fn age_at(birth: CivilDate, on: CivilDate) -> i32 {
    let mut age = on.year - birth.year;
    if on.month_day() < birth.month_day() {
        age -= 1;
    }
    age
}

/// Compute the annual profection for a birth date and natal ascendant
/// sign at the reference date.
pub fn profection(birth: CivilDate, asc_sign: Sign, on: CivilDate) -> Profection {
    let age = age_at(birth, on);
    let sign_idx = (asc_sign.index() as i64 + age as i64).rem_euclid(12) as u8;
    let house = ((age as i64).rem_euclid(12) as u8) + 1;
    let sign = Sign::from_index(sign_idx);
    Profection {
        age,
        sign,
        house,
        lord: sign.domicile_ruler(),
    }
}
