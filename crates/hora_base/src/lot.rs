//! Arabic lots: Fortune and Spirit.
//!
//! Both lots derive from the ascendant, Sun, and Moon by a sect-swapped
//! formula. Fortune by day projects the Moon's distance from the Sun
//! onto the ascendant; Spirit is its mirror, and the two trade formulas
//! at night.

use crate::house::{House, house_of};
use crate::sign::{Sign, sign_from_longitude};
use crate::util::normalize_360;

/// Which lot a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotKind {
    Fortune,
    Spirit,
}

impl LotKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fortune => "Lot of Fortune",
            Self::Spirit => "Lot of Spirit",
        }
    }
}

/// A placed lot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lot {
    pub kind: LotKind,
    pub longitude: f64,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    pub house: u8,
}

fn place(kind: LotKind, lon: f64, houses: &[House; 12]) -> Lot {
    let info = sign_from_longitude(lon);
    Lot {
        kind,
        longitude: lon,
        sign: info.sign,
        degree_in_sign: info.degree_in_sign,
        house: house_of(lon, houses),
    }
}

/// Compute the Lots of Fortune and Spirit, in that order.
///
/// Day: Fortune = asc + Moon - Sun, Spirit = asc + Sun - Moon.
/// Night the formulas swap. All arithmetic mod 360.
pub fn lots(
    asc_lon: f64,
    sun_lon: f64,
    moon_lon: f64,
    is_day: bool,
    houses: &[House; 12],
) -> [Lot; 2] {
    let day_fortune = normalize_360(asc_lon + moon_lon - sun_lon);
    let day_spirit = normalize_360(asc_lon + sun_lon - moon_lon);

    let (fortune, spirit) = if is_day {
        (day_fortune, day_spirit)
    } else {
        (day_spirit, day_fortune)
    };

    [
        place(LotKind::Fortune, fortune, houses),
        place(LotKind::Spirit, spirit, houses),
    ]
}
