//! Firdaria timeline construction.
//!
//! Nine major periods walk a fixed (lord, years) sequence from birth;
//! day and night births use different starting rotations of the same 9
//! pairs. A year is fixed at 365.25 days. The cycle runs once, for 75
//! years; queries past its end find no active period.

use crate::planet::Planet;

use super::subperiod::equal_minors;
use super::types::{DAYS_PER_YEAR, FirdariaMajor, FirdariaMinor, FirdariaTimeline};

/// Day-birth major sequence: (lord, years).
pub const DAY_SEQUENCE: [(Planet, f64); 9] = [
    (Planet::Sun, 10.0),
    (Planet::Venus, 8.0),
    (Planet::Mercury, 13.0),
    (Planet::Moon, 9.0),
    (Planet::Saturn, 11.0),
    (Planet::Jupiter, 12.0),
    (Planet::Mars, 7.0),
    (Planet::NorthNode, 3.0),
    (Planet::SouthNode, 2.0),
];

/// Night-birth major sequence: the planetary run starts from the Moon,
/// the nodes stay last.
pub const NIGHT_SEQUENCE: [(Planet, f64); 9] = [
    (Planet::Moon, 9.0),
    (Planet::Saturn, 11.0),
    (Planet::Jupiter, 12.0),
    (Planet::Mars, 7.0),
    (Planet::Sun, 10.0),
    (Planet::Venus, 8.0),
    (Planet::Mercury, 13.0),
    (Planet::NorthNode, 3.0),
    (Planet::SouthNode, 2.0),
];

/// Canonical 7-planet cycle for minor lords, independent of sect.
///
/// The night sequence's planetary run is a rotation of this same cycle,
/// so minors started from any major lord agree for both sects.
pub const CANONICAL_MINOR_ORDER: [Planet; 7] = [
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
];

/// Build the full 9-major Firdaria timeline from a birth JD.
///
/// Planetary majors get 7 equal minors cycling from the major lord;
/// node majors own a single minor equal to themselves.
pub fn firdaria_timeline(birth_jd: f64, is_day: bool) -> FirdariaTimeline {
    let sequence = if is_day { DAY_SEQUENCE } else { NIGHT_SEQUENCE };

    let mut majors = Vec::with_capacity(9);
    let mut cursor = birth_jd;

    for (lord, years) in sequence {
        let end = cursor + years * DAYS_PER_YEAR;
        let minors = if lord.is_node() {
            vec![FirdariaMinor {
                major: lord,
                minor: lord,
                start_jd: cursor,
                end_jd: end,
            }]
        } else {
            equal_minors(lord, cursor, end, &CANONICAL_MINOR_ORDER)
        };
        majors.push(FirdariaMajor {
            lord,
            start_jd: cursor,
            end_jd: end,
            minors,
        });
        cursor = end;
    }

    FirdariaTimeline {
        is_day,
        birth_jd,
        majors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTH_JD: f64 = 2451545.0;

    #[test]
    fn day_birth_starts_with_sun() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        assert_eq!(tl.majors.len(), 9);
        assert_eq!(tl.majors[0].lord, Planet::Sun);
        assert!((tl.majors[0].start_jd - BIRTH_JD).abs() < 1e-10);
        assert!((tl.majors[0].duration_days() - 3652.5).abs() < 1e-9);
    }

    #[test]
    fn night_birth_starts_with_moon() {
        let tl = firdaria_timeline(BIRTH_JD, false);
        assert_eq!(tl.majors[0].lord, Planet::Moon);
        assert!((tl.majors[0].duration_days() - 9.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn both_sequences_total_75_years() {
        for seq in [DAY_SEQUENCE, NIGHT_SEQUENCE] {
            let years: f64 = seq.iter().map(|(_, y)| y).sum();
            assert!((years - 75.0).abs() < 1e-12);
        }
        let tl = firdaria_timeline(BIRTH_JD, true);
        let end = tl.majors.last().unwrap().end_jd;
        assert!((end - BIRTH_JD - 75.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn majors_are_contiguous() {
        let tl = firdaria_timeline(BIRTH_JD, false);
        for w in tl.majors.windows(2) {
            assert!((w[1].start_jd - w[0].end_jd).abs() < 1e-10);
        }
    }

    #[test]
    fn sun_major_minors_follow_canonical_order() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        let sun = &tl.majors[0];
        assert_eq!(sun.minors.len(), 7);
        let lords: Vec<Planet> = sun.minors.iter().map(|m| m.minor).collect();
        assert_eq!(lords, CANONICAL_MINOR_ORDER.to_vec());
        // Each minor spans majorDuration / 7.
        let expected = 3652.5 / 7.0;
        for m in &sun.minors {
            assert!((m.duration_days() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn minor_order_wraps_from_major_lord() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        // Mars major (7th): minors Mars, Sun, Venus, Mercury, Moon,
        // Saturn, Jupiter.
        let mars = &tl.majors[6];
        assert_eq!(mars.lord, Planet::Mars);
        assert_eq!(mars.minors[0].minor, Planet::Mars);
        assert_eq!(mars.minors[1].minor, Planet::Sun);
        assert_eq!(mars.minors[6].minor, Planet::Jupiter);
    }

    #[test]
    fn node_majors_own_single_minor() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        let node = &tl.majors[7];
        assert_eq!(node.lord, Planet::NorthNode);
        assert_eq!(node.minors.len(), 1);
        assert_eq!(node.minors[0].minor, Planet::NorthNode);
        assert!((node.minors[0].start_jd - node.start_jd).abs() < 1e-10);
        assert!((node.minors[0].end_jd - node.end_jd).abs() < 1e-10);
        assert!((node.duration_days() - 3.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn active_at_birth_is_sun_sun_for_day() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        let active = tl.active(BIRTH_JD).unwrap();
        assert_eq!(active.major, Planet::Sun);
        assert_eq!(active.minor, Planet::Sun);
    }

    #[test]
    fn active_moves_through_minors() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        // 600 days in: second minor of the Sun major (521.79.. each).
        let active = tl.active(BIRTH_JD + 600.0).unwrap();
        assert_eq!(active.major, Planet::Sun);
        assert_eq!(active.minor, Planet::Venus);
    }

    #[test]
    fn active_in_node_period() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        // 71 years in: North Node major (70..73 years).
        let active = tl.active(BIRTH_JD + 71.0 * DAYS_PER_YEAR).unwrap();
        assert_eq!(active.major, Planet::NorthNode);
        assert_eq!(active.minor, Planet::NorthNode);
    }

    #[test]
    fn beyond_horizon_finds_nothing() {
        let tl = firdaria_timeline(BIRTH_JD, true);
        assert!(tl.active(BIRTH_JD + 76.0 * DAYS_PER_YEAR).is_none());
        assert!(tl.active(BIRTH_JD - 1.0).is_none());
        // The very last instant is exclusive.
        let end = tl.majors.last().unwrap().end_jd;
        assert!(tl.active(end).is_none());
        assert!(tl.active(end - 0.001).is_some());
    }

    #[test]
    fn timeline_is_deterministic() {
        let a = firdaria_timeline(BIRTH_JD, false);
        let b = firdaria_timeline(BIRTH_JD, false);
        assert_eq!(a, b);
    }
}
