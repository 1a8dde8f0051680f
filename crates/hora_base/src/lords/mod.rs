//! Time-lord systems: annual profections and the Firdaria timeline.
//!
//! Both systems hand rulership of a stretch of life to a planet. A
//! profection advances the ascendant one sign per year of age; Firdaria
//! walks a fixed 75-year cycle of major periods, each planetary major
//! subdividing into 7 equal minors.

pub mod firdaria;
pub mod profection;
pub mod subperiod;
pub mod types;

pub use firdaria::{
    CANONICAL_MINOR_ORDER, DAY_SEQUENCE, NIGHT_SEQUENCE, firdaria_timeline,
};
pub use profection::{Profection, profection};
pub use subperiod::{cyclic_sequence, equal_minors, find_active_minor, snap_last_minor_end};
pub use types::{DAYS_PER_YEAR, FirdariaMajor, FirdariaMinor, FirdariaTimeline};
