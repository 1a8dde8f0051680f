//! Classical planet enum and body-level constants.
//!
//! The 7 classical bodies carry all dignity and aspect doctrine. The two
//! lunar nodes exist only as Firdaria time-lords; every sign-rulership or
//! orb query returns `None` for them.

use crate::sign::Sign;

/// The 7 classical bodies plus the lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    NorthNode,
    SouthNode,
}

/// All 9 bodies in canonical order.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::NorthNode,
    Planet::SouthNode,
];

/// The 7 classical planets, excluding the nodes.
/// This is the full body set for dignities, aspects, lots, and star hits.
pub const CLASSICAL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }

    /// Astrological glyph for the body.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::NorthNode => "\u{260A}",
            Self::SouthNode => "\u{260B}",
        }
    }

    /// 0-based index into `ALL_PLANETS`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::NorthNode => 7,
            Self::SouthNode => 8,
        }
    }

    /// Whether the body is a lunar node (Firdaria-only time-lord).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }

    /// Classical orb moiety (half-orb) in degrees.
    ///
    /// The tolerance for an aspect between two bodies is the mean of
    /// their moieties. Returns `None` for the nodes, which take no aspects.
    pub const fn orb_moiety(self) -> Option<f64> {
        match self {
            Self::Sun => Some(15.0),
            Self::Moon => Some(12.0),
            Self::Mercury => Some(7.0),
            Self::Venus => Some(7.0),
            Self::Mars => Some(8.0),
            Self::Jupiter => Some(9.0),
            Self::Saturn => Some(9.0),
            Self::NorthNode | Self::SouthNode => None,
        }
    }

    /// Signs this planet rules by domicile (each classical planet rules
    /// one or two signs; nodes rule none).
    pub fn domiciles(self) -> impl Iterator<Item = Sign> {
        Sign::all()
            .iter()
            .copied()
            .filter(move |s| s.domicile_ruler() == self)
    }
}

/// A body's ecliptic position as supplied by the external position provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub planet: Planet,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Daily motion in degrees; negative means retrograde.
    pub speed: f64,
}

impl Position {
    pub const fn new(planet: Planet, longitude: f64, speed: f64) -> Self {
        Self {
            planet,
            longitude,
            speed,
        }
    }

    /// Retrograde iff speed is strictly negative; stationary is direct.
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}
