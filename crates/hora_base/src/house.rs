//! Equal-house cusp computation and house resolution.
//!
//! Twelve equal 30-degree houses starting at the ascendant longitude.
//! Every other engine resolves "which house is this longitude in"
//! through [`house_of`], and the chart's day/night sect comes from the
//! Sun's house under the same convention.

use crate::planet::Planet;
use crate::sign::{Sign, sign_from_longitude};
use crate::util::normalize_360;

/// A single house: number, cusp longitude, occupying sign, and that
/// sign's domicile ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct House {
    /// 1-12.
    pub number: u8,
    /// Cusp ecliptic longitude in [0, 360).
    pub cusp: f64,
    /// Sign the cusp falls in.
    pub sign: Sign,
    /// Domicile ruler of the cusp sign.
    pub ruler: Planet,
}

/// Build the 12 equal-house cusps from the ascendant longitude.
///
/// House n's cusp = (asc + (n-1) * 30) mod 360. Pure arithmetic, no
/// failure modes; any real ascendant value is normalized first.
pub fn equal_houses(asc_lon: f64) -> [House; 12] {
    let asc = normalize_360(asc_lon);
    std::array::from_fn(|i| {
        let cusp = normalize_360(asc + i as f64 * 30.0);
        let sign = sign_from_longitude(cusp).sign;
        House {
            number: (i as u8) + 1,
            cusp,
            sign,
            ruler: sign.domicile_ruler(),
        }
    })
}

/// House (1-12) containing an ecliptic longitude.
pub fn house_of(lon: f64, houses: &[House; 12]) -> u8 {
    let diff = normalize_360(lon - houses[0].cusp);
    (diff / 30.0).floor() as u8 + 1
}

/// Day-birth determination: Sun in houses 7-12 (above the horizon under
/// the equal-house convention).
///
/// This is a simplification of the traditional diurnal rule that only
/// holds for equal houses from the ascendant; it is kept as-is for
/// compatibility with the rest of the doctrine tables.
pub fn is_day_birth(sun_lon: f64, houses: &[House; 12]) -> bool {
    let h = house_of(sun_lon, houses);
    (7..=12).contains(&h)
}
