use std::f64::consts::TAU;

use super::Point3;

/// Toroidal angle of a point, measured from the +x axis in the xy-plane.
///
/// Normalized to `[0, 2π)`.
#[must_use]
pub fn toroidal_angle(point: &Point3) -> f64 {
    let phi = (point.y.atan2(point.x) + TAU) % TAU;
    // Tiny negative angles round up to 2π.
    if phi >= TAU {
        0.0
    } else {
        phi
    }
}

/// Distance of a point from the device axis (the z axis).
#[must_use]
pub fn radial_distance(point: &Point3) -> f64 {
    point.x.hypot(point.y)
}
