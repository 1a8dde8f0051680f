//! Essential dignity scoring for the classical planets.
//!
//! Five independent weighted checks against the sign tables: domicile or
//! detriment (+5/-5), exaltation or fall (+4/-4), triplicity by sect
//! (+3), Egyptian term (+2), Chaldean face (+1). A planet matching
//! nothing with a zero score is peregrine.

use crate::planet::Planet;
use crate::sign::{Sign, sign_from_longitude};

/// A single essential dignity (or debility) held by a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    Domicile,
    Detriment,
    Exaltation,
    Fall,
    TriplicityDay,
    TriplicityNight,
    TriplicityParticipating,
    Term,
    Face,
}

impl Dignity {
    /// Human-readable label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Domicile => "Domicile",
            Self::Detriment => "Detriment",
            Self::Exaltation => "Exaltation",
            Self::Fall => "Fall",
            Self::TriplicityDay => "Triplicity (Day)",
            Self::TriplicityNight => "Triplicity (Night)",
            Self::TriplicityParticipating => "Triplicity (Part.)",
            Self::Term => "Term",
            Self::Face => "Face",
        }
    }

    /// Score contribution of this dignity.
    pub const fn weight(self) -> i32 {
        match self {
            Self::Domicile => 5,
            Self::Detriment => -5,
            Self::Exaltation => 4,
            Self::Fall => -4,
            Self::TriplicityDay | Self::TriplicityNight | Self::TriplicityParticipating => 3,
            Self::Term => 2,
            Self::Face => 1,
        }
    }
}

/// Essential dignity evaluation result for one planet.
#[derive(Debug, Clone, PartialEq)]
pub struct DignityResult {
    /// Dignities held, in evaluation order.
    pub dignities: Vec<Dignity>,
    /// Sum of category weights; may be negative.
    pub score: i32,
    /// Score is exactly zero and no dignity matched.
    pub peregrine: bool,
}

/// Score a planet's essential dignities in the sign its longitude occupies.
///
/// Exaltation and fall are sign-based (the traditional exact degree is
/// not a gate). Triplicity awards the sect lord first, with the
/// participating lord as fallback for either sect. Nodes hold no
/// essential dignities and always come back peregrine.
pub fn essential_dignities(planet: Planet, lon: f64, is_day: bool) -> DignityResult {
    let info = sign_from_longitude(lon);
    let sign = info.sign;
    let degree = info.degree_in_sign;

    let mut dignities = Vec::new();

    if sign.domicile_ruler() == planet {
        dignities.push(Dignity::Domicile);
    } else if sign.detriment_holder() == planet {
        dignities.push(Dignity::Detriment);
    }

    if sign.exaltation().map(|(p, _)| p) == Some(planet) {
        dignities.push(Dignity::Exaltation);
    } else if sign.fall_holder() == Some(planet) {
        dignities.push(Dignity::Fall);
    }

    let (day_lord, night_lord, participating) = sign.element().triplicity_lords();
    if is_day && day_lord == planet {
        dignities.push(Dignity::TriplicityDay);
    } else if !is_day && night_lord == planet {
        dignities.push(Dignity::TriplicityNight);
    } else if participating == planet {
        dignities.push(Dignity::TriplicityParticipating);
    }

    if sign.term_ruler(degree) == planet {
        dignities.push(Dignity::Term);
    }

    if sign.face_ruler(degree) == planet {
        dignities.push(Dignity::Face);
    }

    let score: i32 = dignities.iter().map(|d| d.weight()).sum();
    let peregrine = score == 0 && dignities.is_empty();

    DignityResult {
        dignities,
        score,
        peregrine,
    }
}
