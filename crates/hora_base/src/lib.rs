//! Traditional astrology doctrine: dignities, aspects, lots, time-lords.
//!
//! This crate provides:
//! - Zodiac sign and classical planet enums with all rulership tables
//! - Equal-house cusps and house resolution
//! - Essential dignity scoring and accidental state classification
//! - Major aspects with reception, Arabic lots, fixed-star conjunctions
//! - Annual profections and the Firdaria time-lord timeline
//!
//! Everything is pure arithmetic over closed constant tables; positions
//! come from an external ephemeris provider.

pub mod accidental;
pub mod aspect;
pub mod dignity;
pub mod error;
pub mod fixed_star;
pub mod house;
pub mod lords;
pub mod lot;
pub mod planet;
pub mod sign;
pub mod util;

pub use accidental::{
    AccidentalState, Angularity, CAZIMI_ORB, COMBUST_ORB, SolarPhase, UNDER_BEAMS_ORB,
    accidental_state, solar_phase,
};
pub use aspect::{ALL_ASPECTS, Aspect, AspectKind, Reception, aspects, reception};
pub use dignity::{Dignity, DignityResult, essential_dignities};
pub use error::HoraError;
pub use fixed_star::{CATALOG, FixedStar, FixedStarHit, STAR_ORB, fixed_star_hits};
pub use house::{House, equal_houses, house_of, is_day_birth};
pub use lords::{
    CANONICAL_MINOR_ORDER, DAY_SEQUENCE, DAYS_PER_YEAR, FirdariaMajor, FirdariaMinor,
    FirdariaTimeline, NIGHT_SEQUENCE, Profection, firdaria_timeline, profection,
};
pub use lot::{Lot, LotKind, lots};
pub use planet::{ALL_PLANETS, CLASSICAL_PLANETS, Planet, Position};
pub use sign::{
    ALL_SIGNS, Dms, Element, Sign, SignInfo, deg_to_dms, sign_from_longitude,
};
pub use util::{angular_separation, normalize_360};
