//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two ecliptic longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_360(lon1) - normalize_360(lon2)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Round a degree value to 2 decimal places (orb reporting precision).
pub fn round_orb(deg: f64) -> f64 {
    (deg * 100.0).round() / 100.0
}
