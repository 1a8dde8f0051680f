//! Convenience wrapper for the hora classical astrology engines.
//!
//! Takes validated positions from an external ephemeris provider and
//! assembles the full chart reading (houses, dignity-annotated planets,
//! aspects, lots, fixed stars, profection, and Firdaria) as plain data
//! records.
//!
//! # Quick start
//!
//! ```rust
//! use hora_rs::*;
//!
//! let positions = [
//!     Position::new(Planet::Sun, 120.5, 0.95),
//!     Position::new(Planet::Moon, 250.1, 13.2),
//!     Position::new(Planet::Mercury, 110.0, 1.3),
//!     Position::new(Planet::Venus, 95.4, 1.2),
//!     Position::new(Planet::Mars, 10.0, 0.5),
//!     Position::new(Planet::Jupiter, 200.8, 0.1),
//!     Position::new(Planet::Saturn, 310.2, -0.05),
//! ];
//! let input = ChartInput {
//!     positions,
//!     ascendant: 75.0,
//!     birth_date: "1990/07/23".parse().unwrap(),
//!     current_date: Some("2026/08/30".parse().unwrap()),
//! };
//! let reading = compute_reading(&input).unwrap();
//! assert_eq!(reading.planets.len(), 7);
//! ```

pub mod reading;

pub use reading::{ChartInput, PlanetReading, Reading, compute_reading};

// Re-export the doctrine types so callers only need `use hora_rs::*`.
pub use hora_base::{
    AccidentalState, Angularity, Aspect, AspectKind, Dignity, DignityResult, Dms, Element,
    FirdariaMajor, FirdariaMinor, FirdariaTimeline, FixedStarHit, HoraError, House, Lot,
    LotKind, Planet, Position, Profection, Reception, Sign, SolarPhase,
};
pub use hora_time::{CivilDate, TimeError};
