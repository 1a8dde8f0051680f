//! Shared sub-period generation for the Firdaria engine.
//!
//! Planetary majors divide into equal-length minors whose lords cycle
//! from the major lord through the canonical planet order, wrapping
//! around. The last minor's end is snapped to the parent's end to absorb
//! floating-point drift.

use crate::planet::Planet;

use super::types::FirdariaMinor;

/// Rotate a 7-planet order so it starts at `start`.
///
/// Falls back to the unrotated order if `start` is not in the sequence
/// (a node lord never reaches here; node majors are not subdivided).
pub fn cyclic_sequence(order: &[Planet; 7], start: Planet) -> [Planet; 7] {
    let pos = order.iter().position(|&p| p == start).unwrap_or(0);
    std::array::from_fn(|i| order[(pos + i) % 7])
}

/// Snap the last minor's end to the parent's end.
pub fn snap_last_minor_end(minors: &mut [FirdariaMinor], parent_end_jd: f64) {
    if let Some(last) = minors.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the 7 equal minors of a planetary major period.
pub fn equal_minors(
    major_lord: Planet,
    start_jd: f64,
    end_jd: f64,
    order: &[Planet; 7],
) -> Vec<FirdariaMinor> {
    let seq = cyclic_sequence(order, major_lord);
    let duration = (end_jd - start_jd) / 7.0;
    let mut minors = Vec::with_capacity(7);
    let mut cursor = start_jd;

    for minor in seq {
        let end = cursor + duration;
        minors.push(FirdariaMinor {
            major: major_lord,
            minor,
            start_jd: cursor,
            end_jd: end,
        });
        cursor = end;
    }

    snap_last_minor_end(&mut minors, end_jd);
    minors
}

/// Index of the first minor whose `[start, end)` interval contains `jd`.
pub fn find_active_minor(minors: &[FirdariaMinor], jd: f64) -> Option<usize> {
    minors.iter().position(|m| m.contains(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lords::firdaria::CANONICAL_MINOR_ORDER;

    #[test]
    fn cyclic_from_first_is_identity() {
        let seq = cyclic_sequence(&CANONICAL_MINOR_ORDER, Planet::Sun);
        assert_eq!(seq, CANONICAL_MINOR_ORDER);
    }

    #[test]
    fn cyclic_wraps_around() {
        let seq = cyclic_sequence(&CANONICAL_MINOR_ORDER, Planet::Moon);
        assert_eq!(seq[0], Planet::Moon);
        assert_eq!(seq[1], Planet::Saturn);
        assert_eq!(seq[6], Planet::Mercury);
    }

    #[test]
    fn equal_minors_partition_parent() {
        let minors = equal_minors(Planet::Venus, 1000.0, 1700.0, &CANONICAL_MINOR_ORDER);
        assert_eq!(minors.len(), 7);
        assert!((minors[0].start_jd - 1000.0).abs() < 1e-10);
        assert!((minors[6].end_jd - 1700.0).abs() < 1e-10);
        for w in minors.windows(2) {
            assert!((w[1].start_jd - w[0].end_jd).abs() < 1e-10);
        }
        for m in &minors {
            assert_eq!(m.major, Planet::Venus);
            assert!((m.duration_days() - 100.0).abs() < 1e-9);
        }
        assert_eq!(minors[0].minor, Planet::Venus);
        assert_eq!(minors[1].minor, Planet::Mercury);
    }

    #[test]
    fn find_active_half_open() {
        let minors = equal_minors(Planet::Sun, 0.0, 70.0, &CANONICAL_MINOR_ORDER);
        assert_eq!(find_active_minor(&minors, 0.0), Some(0));
        assert_eq!(find_active_minor(&minors, 9.999), Some(0));
        assert_eq!(find_active_minor(&minors, 10.0), Some(1));
        assert_eq!(find_active_minor(&minors, 70.0), None);
        assert_eq!(find_active_minor(&minors, -0.001), None);
    }
}
