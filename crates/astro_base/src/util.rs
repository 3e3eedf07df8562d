//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
