//! Accidental state classification: angularity, solar phase, motion.
//!
//! Accidental dignity is circumstantial strength: where the planet sits
//! relative to the angles, how close it stands to the Sun, and whether
//! it is retrograde. All three checks are independent.

use crate::house::House;
use crate::planet::Planet;
use crate::util::angular_separation;

/// Cazimi: within 17 arc-minutes of the Sun's center.
pub const CAZIMI_ORB: f64 = 0.28;
/// Combust: within 8.5 degrees of the Sun.
pub const COMBUST_ORB: f64 = 8.5;
/// Under the beams: within 17 degrees of the Sun.
pub const UNDER_BEAMS_ORB: f64 = 17.0;

/// House-placement strength class. Exactly one always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angularity {
    /// Houses 1, 4, 7, 10.
    Angular,
    /// Houses 2, 5, 8, 11.
    Succedent,
    /// Houses 3, 6, 9, 12.
    Cadent,
}

impl Angularity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Angular => "Angular",
            Self::Succedent => "Succedent",
            Self::Cadent => "Cadent",
        }
    }

    /// Classify a house number (1-12).
    pub const fn of_house(house: u8) -> Angularity {
        match house {
            1 | 4 | 7 | 10 => Self::Angular,
            2 | 5 | 8 | 11 => Self::Succedent,
            _ => Self::Cadent,
        }
    }
}

/// Solar proximity condition, from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarPhase {
    /// In the heart of the Sun.
    Cazimi,
    /// Burnt by the Sun's rays.
    Combust,
    /// Obscured but not burnt.
    UnderBeams,
}

impl SolarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cazimi => "Cazimi",
            Self::Combust => "Combust",
            Self::UnderBeams => "Under the Beams",
        }
    }
}

/// Solar phase of a body from its separation from the Sun.
///
/// Thresholds are inclusive upper bounds checked in priority order
/// (Cazimi, then Combust, then Under the Beams). The Sun itself has no
/// solar phase.
pub fn solar_phase(planet: Planet, lon: f64, sun_lon: f64) -> Option<SolarPhase> {
    if planet == Planet::Sun {
        return None;
    }
    let sep = angular_separation(lon, sun_lon);
    if sep <= CAZIMI_ORB {
        Some(SolarPhase::Cazimi)
    } else if sep <= COMBUST_ORB {
        Some(SolarPhase::Combust)
    } else if sep <= UNDER_BEAMS_ORB {
        Some(SolarPhase::UnderBeams)
    } else {
        None
    }
}

/// Full accidental state of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentalState {
    pub angularity: Angularity,
    pub solar_phase: Option<SolarPhase>,
    pub retrograde: bool,
}

/// Classify a planet's accidental state.
///
/// `speed` is daily motion; strictly negative means retrograde
/// (stationary counts as direct).
pub fn accidental_state(
    planet: Planet,
    lon: f64,
    houses: &[House; 12],
    sun_lon: f64,
    speed: f64,
) -> AccidentalState {
    let house = crate::house::house_of(lon, houses);
    AccidentalState {
        angularity: Angularity::of_house(house),
        solar_phase: solar_phase(planet, lon, sun_lon),
        retrograde: speed < 0.0,
    }
}
