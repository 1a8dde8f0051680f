//! Zodiac signs, their rulership tables, and DMS position breakdown.
//!
//! The tropical ecliptic divides into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Every piece of sign-keyed doctrine lives
//! in this module as a const match table: domicile rulers, detriments,
//! exaltations (with their traditional exact degree), falls, Dorothean
//! triplicity lords, Egyptian terms, and Chaldean faces. The rest of the
//! crate reads the tables only through these accessors.

use crate::planet::Planet;
use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The four classical elements, carrying the Dorothean triplicity lords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Element name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    /// Dorothean triplicity lords: (day lord, night lord, participating).
    pub const fn triplicity_lords(self) -> (Planet, Planet, Planet) {
        match self {
            Self::Fire => (Planet::Sun, Planet::Jupiter, Planet::Saturn),
            Self::Earth => (Planet::Venus, Planet::Moon, Planet::Mars),
            Self::Air => (Planet::Saturn, Planet::Mercury, Planet::Jupiter),
            Self::Water => (Planet::Venus, Planet::Mars, Planet::Moon),
        }
    }
}

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign from a 0-based index (taken mod 12).
    pub const fn from_index(idx: u8) -> Sign {
        ALL_SIGNS[(idx % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }

    /// Element of the sign (Fire/Earth/Air/Water repeating from Aries).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Domicile ruler of the sign.
    pub const fn domicile_ruler(self) -> Planet {
        match self {
            Self::Aries => Planet::Mars,
            Self::Taurus => Planet::Venus,
            Self::Gemini => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Virgo => Planet::Mercury,
            Self::Libra => Planet::Venus,
            Self::Scorpio => Planet::Mars,
            Self::Sagittarius => Planet::Jupiter,
            Self::Capricorn => Planet::Saturn,
            Self::Aquarius => Planet::Saturn,
            Self::Pisces => Planet::Jupiter,
        }
    }

    /// Planet in detriment here (ruler of the opposite sign).
    pub const fn detriment_holder(self) -> Planet {
        match self {
            Self::Aries => Planet::Venus,
            Self::Taurus => Planet::Mars,
            Self::Gemini => Planet::Jupiter,
            Self::Cancer => Planet::Saturn,
            Self::Leo => Planet::Saturn,
            Self::Virgo => Planet::Jupiter,
            Self::Libra => Planet::Mars,
            Self::Scorpio => Planet::Venus,
            Self::Sagittarius => Planet::Mercury,
            Self::Capricorn => Planet::Moon,
            Self::Aquarius => Planet::Sun,
            Self::Pisces => Planet::Mercury,
        }
    }

    /// Exaltation holder and its traditional exact degree.
    ///
    /// Only 7 signs host an exaltation. The degree is informational;
    /// exaltation dignity is sign-based, not degree-gated.
    pub const fn exaltation(self) -> Option<(Planet, u8)> {
        match self {
            Self::Aries => Some((Planet::Sun, 19)),
            Self::Taurus => Some((Planet::Moon, 3)),
            Self::Cancer => Some((Planet::Jupiter, 15)),
            Self::Virgo => Some((Planet::Mercury, 15)),
            Self::Libra => Some((Planet::Saturn, 21)),
            Self::Capricorn => Some((Planet::Mars, 28)),
            Self::Pisces => Some((Planet::Venus, 27)),
            _ => None,
        }
    }

    /// Planet in fall here (opposite of its exaltation), if any.
    pub const fn fall_holder(self) -> Option<Planet> {
        match self {
            Self::Aries => Some(Planet::Saturn),
            Self::Cancer => Some(Planet::Mars),
            Self::Virgo => Some(Planet::Venus),
            Self::Libra => Some(Planet::Sun),
            Self::Scorpio => Some(Planet::Moon),
            Self::Capricorn => Some(Planet::Jupiter),
            Self::Pisces => Some(Planet::Mercury),
            _ => None,
        }
    }

    /// Egyptian terms: 5 (upper-bound, ruler) pairs, bounds strictly
    /// increasing and ending at 30. A degree belongs to the first term
    /// whose bound strictly exceeds it.
    pub const fn terms(self) -> [(f64, Planet); 5] {
        match self {
            Self::Aries => [
                (6.0, Planet::Jupiter),
                (12.0, Planet::Venus),
                (20.0, Planet::Mercury),
                (25.0, Planet::Mars),
                (30.0, Planet::Saturn),
            ],
            Self::Taurus => [
                (8.0, Planet::Venus),
                (14.0, Planet::Mercury),
                (22.0, Planet::Jupiter),
                (27.0, Planet::Saturn),
                (30.0, Planet::Mars),
            ],
            Self::Gemini => [
                (6.0, Planet::Mercury),
                (12.0, Planet::Jupiter),
                (17.0, Planet::Venus),
                (24.0, Planet::Mars),
                (30.0, Planet::Saturn),
            ],
            Self::Cancer => [
                (7.0, Planet::Mars),
                (13.0, Planet::Venus),
                (19.0, Planet::Mercury),
                (26.0, Planet::Jupiter),
                (30.0, Planet::Saturn),
            ],
            Self::Leo => [
                (6.0, Planet::Jupiter),
                (11.0, Planet::Venus),
                (18.0, Planet::Saturn),
                (24.0, Planet::Mercury),
                (30.0, Planet::Mars),
            ],
            Self::Virgo => [
                (7.0, Planet::Mercury),
                (17.0, Planet::Venus),
                (21.0, Planet::Jupiter),
                (28.0, Planet::Mars),
                (30.0, Planet::Saturn),
            ],
            Self::Libra => [
                (6.0, Planet::Saturn),
                (14.0, Planet::Venus),
                (21.0, Planet::Jupiter),
                (28.0, Planet::Mercury),
                (30.0, Planet::Mars),
            ],
            Self::Scorpio => [
                (7.0, Planet::Mars),
                (11.0, Planet::Venus),
                (19.0, Planet::Mercury),
                (24.0, Planet::Jupiter),
                (30.0, Planet::Saturn),
            ],
            Self::Sagittarius => [
                (12.0, Planet::Jupiter),
                (17.0, Planet::Venus),
                (21.0, Planet::Mercury),
                (26.0, Planet::Saturn),
                (30.0, Planet::Mars),
            ],
            Self::Capricorn => [
                (7.0, Planet::Mercury),
                (14.0, Planet::Jupiter),
                (22.0, Planet::Venus),
                (26.0, Planet::Saturn),
                (30.0, Planet::Mars),
            ],
            Self::Aquarius => [
                (7.0, Planet::Saturn),
                (13.0, Planet::Mercury),
                (20.0, Planet::Jupiter),
                (25.0, Planet::Venus),
                (30.0, Planet::Mars),
            ],
            Self::Pisces => [
                (12.0, Planet::Venus),
                (16.0, Planet::Jupiter),
                (19.0, Planet::Mercury),
                (28.0, Planet::Mars),
                (30.0, Planet::Saturn),
            ],
        }
    }

    /// Chaldean faces (decans): 3 rulers, each owning 10 degrees.
    pub const fn faces(self) -> [Planet; 3] {
        match self {
            Self::Aries => [Planet::Mars, Planet::Sun, Planet::Venus],
            Self::Taurus => [Planet::Mercury, Planet::Moon, Planet::Saturn],
            Self::Gemini => [Planet::Jupiter, Planet::Mars, Planet::Sun],
            Self::Cancer => [Planet::Venus, Planet::Mercury, Planet::Moon],
            Self::Leo => [Planet::Saturn, Planet::Jupiter, Planet::Mars],
            Self::Virgo => [Planet::Sun, Planet::Venus, Planet::Mercury],
            Self::Libra => [Planet::Moon, Planet::Saturn, Planet::Jupiter],
            Self::Scorpio => [Planet::Mars, Planet::Sun, Planet::Venus],
            Self::Sagittarius => [Planet::Mercury, Planet::Moon, Planet::Saturn],
            Self::Capricorn => [Planet::Jupiter, Planet::Mars, Planet::Sun],
            Self::Aquarius => [Planet::Venus, Planet::Mercury, Planet::Moon],
            Self::Pisces => [Planet::Saturn, Planet::Jupiter, Planet::Mars],
        }
    }

    /// Term ruler for a within-sign degree.
    ///
    /// Uses the first bound with `degree < bound` (strict), so a degree
    /// sitting exactly on a boundary belongs to the term after it.
    pub fn term_ruler(self, degree_in_sign: f64) -> Planet {
        for (bound, ruler) in self.terms() {
            if degree_in_sign < bound {
                return ruler;
            }
        }
        // degree_in_sign is always < 30 for in-range input; fall back to
        // the last term for a degenerate 30.0 input.
        self.terms()[4].1
    }

    /// Face (decan) ruler for a within-sign degree.
    pub fn face_ruler(self, degree_in_sign: f64) -> Planet {
        let decan = ((degree_in_sign / 10.0).floor() as usize).min(2);
        self.faces()[decan]
    }
}

/// Degrees-minutes-seconds representation of an angle within a sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Break a degree value into degrees, minutes, and seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let degrees = deg.floor();
    let rem_min = (deg - degrees) * 60.0;
    let minutes = rem_min.floor();
    let seconds = (rem_min - minutes) * 60.0;
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds,
    }
}

/// Sign placement of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// DMS breakdown of `degree_in_sign`.
    pub dms: Dms,
}

/// Locate an ecliptic longitude in its sign.
pub fn sign_from_longitude(lon: f64) -> SignInfo {
    let lon = normalize_360(lon);
    let idx = (lon / 30.0).floor() as u8;
    let degree_in_sign = lon % 30.0;
    SignInfo {
        sign: Sign::from_index(idx),
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sign_has_ruler_and_detriment() {
        for sign in ALL_SIGNS {
            // Distinct by construction: detriment is the opposite ruler.
            assert_ne!(sign.domicile_ruler(), sign.detriment_holder());
        }
    }

    #[test]
    fn detriment_is_opposite_ruler() {
        for sign in ALL_SIGNS {
            let opposite = Sign::from_index(sign.index() + 6);
            assert_eq!(sign.detriment_holder(), opposite.domicile_ruler());
        }
    }

    #[test]
    fn exactly_seven_exaltations() {
        let count = ALL_SIGNS.iter().filter(|s| s.exaltation().is_some()).count();
        assert_eq!(count, 7);
    }

    #[test]
    fn fall_is_opposite_exaltation() {
        for sign in ALL_SIGNS {
            let opposite = Sign::from_index(sign.index() + 6);
            match sign.fall_holder() {
                Some(p) => assert_eq!(Some(p), opposite.exaltation().map(|(e, _)| e)),
                None => assert!(opposite.exaltation().is_none()),
            }
        }
    }

    #[test]
    fn exaltation_and_fall_disjoint() {
        for sign in ALL_SIGNS {
            if let (Some((exalt, _)), Some(fall)) = (sign.exaltation(), sign.fall_holder()) {
                assert_ne!(exalt, fall, "{}", sign.name());
            }
        }
    }

    #[test]
    fn term_bounds_strictly_increase_to_30() {
        for sign in ALL_SIGNS {
            let terms = sign.terms();
            let mut prev = 0.0;
            for (bound, _) in terms {
                assert!(bound > prev, "{} terms not increasing", sign.name());
                prev = bound;
            }
            assert!((terms[4].0 - 30.0).abs() < 1e-12);
        }
    }

    #[test]
    fn term_boundary_belongs_to_next_term() {
        // Aries: 0-6 Jupiter, 6-12 Venus. Exactly 6.0 is Venus, not Jupiter.
        assert_eq!(Sign::Aries.term_ruler(5.999), Planet::Jupiter);
        assert_eq!(Sign::Aries.term_ruler(6.0), Planet::Venus);
    }

    #[test]
    fn term_first_and_last() {
        assert_eq!(Sign::Aries.term_ruler(0.0), Planet::Jupiter);
        assert_eq!(Sign::Aries.term_ruler(29.99), Planet::Saturn);
    }

    #[test]
    fn face_decan_boundaries() {
        assert_eq!(Sign::Aries.face_ruler(0.0), Planet::Mars);
        assert_eq!(Sign::Aries.face_ruler(9.999), Planet::Mars);
        assert_eq!(Sign::Aries.face_ruler(10.0), Planet::Sun);
        assert_eq!(Sign::Aries.face_ruler(20.0), Planet::Venus);
    }

    #[test]
    fn elements_cycle_from_aries() {
        assert_eq!(Sign::Aries.element(), Element::Fire);
        assert_eq!(Sign::Taurus.element(), Element::Earth);
        assert_eq!(Sign::Gemini.element(), Element::Air);
        assert_eq!(Sign::Cancer.element(), Element::Water);
        assert_eq!(Sign::Leo.element(), Element::Fire);
    }

    #[test]
    fn sign_from_longitude_basic() {
        let info = sign_from_longitude(15.0);
        assert_eq!(info.sign, Sign::Aries);
        assert!((info.degree_in_sign - 15.0).abs() < 1e-12);
    }

    #[test]
    fn sign_from_longitude_wraps() {
        assert_eq!(sign_from_longitude(360.0).sign, Sign::Aries);
        assert_eq!(sign_from_longitude(-5.0).sign, Sign::Pisces);
        assert_eq!(sign_from_longitude(359.99).sign, Sign::Pisces);
    }

    #[test]
    fn dms_breakdown() {
        let dms = deg_to_dms(15.5125);
        assert_eq!(dms.degrees, 15);
        assert_eq!(dms.minutes, 30);
        assert!((dms.seconds - 45.0).abs() < 1e-6);
    }

    #[test]
    fn from_index_wraps_mod_12() {
        assert_eq!(Sign::from_index(12), Sign::Aries);
        assert_eq!(Sign::from_index(17), Sign::Virgo);
    }
}
