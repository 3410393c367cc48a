use std::f64::consts::TAU;

use crate::geometry::{CrossSection, Filament, ToroidalExtent};

/// Angular window `[min_rad, 2π) ∪ [0, max_rad]` of the modeled sector,
/// widened on both sides by a tolerance covering the coil width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToroidalWindow {
    tolerance: f64,
    min_rad: f64,
    max_rad: f64,
}

impl ToroidalWindow {
    /// Builds the window for a sector.
    ///
    /// The tolerance is `2 * atan2(characteristic_length, avg_radial_distance)`,
    /// twice the angle the coil width subtends at the average coil radius.
    #[must_use]
    pub fn new(
        extent: ToroidalExtent,
        cross_section: &CrossSection,
        avg_radial_distance: f64,
    ) -> Self {
        let tolerance = 2.0 * cross_section
            .characteristic_length()
            .atan2(avg_radial_distance);
        Self {
            tolerance,
            min_rad: TAU - tolerance,
            max_rad: extent.radians() + tolerance,
        }
    }

    /// Angular tolerance in radians.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Lower bound of the wrapped part of the window.
    #[must_use]
    pub fn min_rad(&self) -> f64 {
        self.min_rad
    }

    /// Upper bound of the window.
    #[must_use]
    pub fn max_rad(&self) -> f64 {
        self.max_rad
    }

    /// Tests a toroidal angle in `[0, 2π)`.
    #[must_use]
    pub fn contains(&self, phi: f64) -> bool {
        phi >= self.min_rad || phi <= self.max_rad
    }

    /// A filament overlaps the window if its smallest or largest point angle
    /// falls inside.
    #[must_use]
    pub fn overlaps(&self, filament: &Filament) -> bool {
        let (min_phi, max_phi) = filament.toroidal_angle_bounds();
        self.contains(min_phi) || self.contains(max_phi)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    fn window(degrees: f64) -> ToroidalWindow {
        ToroidalWindow::new(
            ToroidalExtent::from_degrees(degrees).unwrap(),
            &CrossSection::Circle { radius: 1.0 },
            100.0,
        )
    }

    #[test]
    fn bounds_include_tolerance() {
        let w = window(90.0);
        let tol = 2.0 * 1.0_f64.atan2(100.0);
        assert!((w.tolerance() - tol).abs() < 1e-15);
        assert!((w.min_rad() - (TAU - tol)).abs() < 1e-15);
        assert!((w.max_rad() - (FRAC_PI_2 + tol)).abs() < 1e-15);
    }

    #[test]
    fn window_wraps_through_zero() {
        let w = window(90.0);
        assert!(w.contains(0.0));
        assert!(w.contains(FRAC_PI_4));
        assert!(w.contains(FRAC_PI_2 + 0.5 * w.tolerance()));
        assert!(w.contains(TAU - 0.5 * w.tolerance()));
        assert!(!w.contains(PI));
        assert!(!w.contains(FRAC_PI_2 + 2.0 * w.tolerance()));
    }

    #[test]
    fn full_turn_contains_everything() {
        let w = window(360.0);
        for i in 0..64 {
            assert!(w.contains(f64::from(i) * TAU / 64.0));
        }
    }
}
