//! Fixed-star conjunction detection against a static catalog.
//!
//! The catalog is an epoch snapshot of ecliptic longitudes with no
//! proper-motion or precession correction. Star longitudes drift about
//! 1 degree per 72 years, so the catalog must be refreshed for charts
//! far from its reference epoch.

use crate::planet::Position;
use crate::util::{angular_separation, round_orb};

/// Conjunction orb for fixed stars, inclusive.
pub const STAR_ORB: f64 = 1.5;

/// A catalog star at a fixed ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStar {
    pub name: &'static str,
    pub longitude: f64,
}

/// Star catalog, 2026-epoch approximate positions.
pub const CATALOG: [FixedStar; 2] = [
    FixedStar {
        name: "Regulus",
        longitude: 150.1,
    },
    FixedStar {
        name: "Spica",
        longitude: 204.0,
    },
];

/// A body found conjunct a catalog star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStarHit {
    pub planet: crate::planet::Planet,
    pub star: &'static str,
    /// Separation in degrees, rounded to 2 decimals.
    pub orb: f64,
}

/// Scan all body/star pairs for conjunctions within [`STAR_ORB`].
pub fn fixed_star_hits(positions: &[Position]) -> Vec<FixedStarHit> {
    let mut hits = Vec::new();
    for pos in positions {
        for star in CATALOG {
            let sep = angular_separation(pos.longitude, star.longitude);
            if sep <= STAR_ORB {
                hits.push(FixedStarHit {
                    planet: pos.planet,
                    star: star.name,
                    orb: round_orb(sep),
                });
            }
        }
    }
    hits
}
