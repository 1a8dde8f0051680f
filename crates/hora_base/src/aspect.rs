//! Major-aspect detection between classical planet pairs, with reception.
//!
//! Every unordered pair of the 7 classical bodies is tested against the
//! five Ptolemaic angles. The pair's tolerance is the mean of the two
//! bodies' orb moieties, so a Sun-Moon pair reaches much further than a
//! Mercury-Venus pair. A pair may legitimately register two aspects when
//! generous moieties make adjacent angle windows overlap.

use crate::planet::Planet;
use crate::planet::Position;
use crate::sign::sign_from_longitude;
use crate::util::{angular_separation, round_orb};

/// The five Ptolemaic major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All five aspect kinds in angle order.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle of the aspect in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// Reception between the two ends of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reception {
    /// Neither body sits in the other's domicile or exaltation.
    None,
    /// Exactly one direction holds; the payload is the received planet
    /// (the guest standing in the other body's dignity).
    OneWay(Planet),
    /// Both directions hold.
    Mutual,
}

/// A detected aspect between two planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub first: Planet,
    pub second: Planet,
    pub kind: AspectKind,
    /// Deviation from the exact angle, rounded to 2 decimals.
    pub orb: f64,
    pub reception: Reception,
}

/// Whether `host` holds domicile or exaltation over the sign `lon` occupies.
fn dignifies(host: Planet, lon: f64) -> bool {
    let sign = sign_from_longitude(lon).sign;
    sign.domicile_ruler() == host || sign.exaltation().map(|(p, _)| p) == Some(host)
}

/// Classify reception between two placed planets.
///
/// Mutual iff each stands in a sign where the other holds domicile or
/// exaltation; one-way iff exactly one direction holds.
pub fn reception(p1: Planet, lon1: f64, p2: Planet, lon2: f64) -> Reception {
    let p1_received = dignifies(p2, lon1);
    let p2_received = dignifies(p1, lon2);
    match (p1_received, p2_received) {
        (true, true) => Reception::Mutual,
        (true, false) => Reception::OneWay(p1),
        (false, true) => Reception::OneWay(p2),
        (false, false) => Reception::None,
    }
}

/// Detect all major aspects among the given positions.
///
/// Positions are scanned as unordered pairs in input order; nodes (which
/// carry no moiety) never aspect. The result is independent of pair
/// orientation: swapping two inputs only relabels `first`/`second`.
pub fn aspects(positions: &[Position]) -> Vec<Aspect> {
    let mut found = Vec::new();

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let a = &positions[i];
            let b = &positions[j];
            let (Some(moiety_a), Some(moiety_b)) =
                (a.planet.orb_moiety(), b.planet.orb_moiety())
            else {
                continue;
            };
            let tolerance = (moiety_a + moiety_b) / 2.0;
            let sep = angular_separation(a.longitude, b.longitude);

            for kind in ALL_ASPECTS {
                let deviation = (sep - kind.angle()).abs();
                if deviation <= tolerance {
                    found.push(Aspect {
                        first: a.planet,
                        second: b.planet,
                        kind,
                        orb: round_orb(deviation),
                        reception: reception(a.planet, a.longitude, b.planet, b.longitude),
                    });
                }
            }
        }
    }

    found
}
