use crate::error::GeometryError;
use crate::math::{toroidal_angle, Point3};

use super::{CrossSection, ToroidalExtent};

/// Ordered sequence of points approximating one coil centerline [cm].
#[derive(Debug, Clone, PartialEq)]
pub struct Filament {
    points: Vec<Point3>,
}

impl Filament {
    /// Creates a filament from its points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] if `points` is empty.
    pub fn new(points: Vec<Point3>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::TooFewPoints { count: 0 });
        }
        Ok(Self { points })
    }

    /// All points, including the closing duplicate of a closed filament.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consumes the filament, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; filaments hold at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the filament.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.points[0]
    }

    /// Returns `true` if the last point repeats the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Points of the loop without the closing duplicate.
    #[must_use]
    pub fn unique_points(&self) -> &[Point3] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Mean of all point coordinates.
    #[must_use]
    pub fn center_of_mass(&self) -> Point3 {
        let sum = self
            .points
            .iter()
            .fold(Point3::origin().coords, |acc, p| acc + p.coords);
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Point3::from(sum / n)
    }

    /// Toroidal angle of the center of mass, in `[0, 2π)`.
    #[must_use]
    pub fn center_of_mass_angle(&self) -> f64 {
        toroidal_angle(&self.center_of_mass())
    }

    /// Smallest and largest toroidal angle over all points.
    #[must_use]
    pub fn toroidal_angle_bounds(&self) -> (f64, f64) {
        self.points
            .iter()
            .map(toroidal_angle)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), phi| {
                (lo.min(phi), hi.max(phi))
            })
    }
}

/// All filaments of one coil set together with the shared build parameters.
#[derive(Debug, Clone)]
pub struct FilamentSet {
    filaments: Vec<Filament>,
    cross_section: CrossSection,
    toroidal_extent: ToroidalExtent,
}

impl FilamentSet {
    /// Creates a filament set.
    #[must_use]
    pub fn new(
        filaments: Vec<Filament>,
        cross_section: CrossSection,
        toroidal_extent: ToroidalExtent,
    ) -> Self {
        Self {
            filaments,
            cross_section,
            toroidal_extent,
        }
    }

    /// Filaments in toroidal order.
    #[must_use]
    pub fn filaments(&self) -> &[Filament] {
        &self.filaments
    }

    /// Number of filaments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filaments.len()
    }

    /// Returns `true` if the set holds no filaments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filaments.is_empty()
    }

    /// Shared coil cross-section.
    #[must_use]
    pub fn cross_section(&self) -> &CrossSection {
        &self.cross_section
    }

    /// Modeled toroidal extent.
    #[must_use]
    pub fn toroidal_extent(&self) -> ToroidalExtent {
        self.toroidal_extent
    }

    /// Replaces the filaments with the output of a later pipeline stage.
    pub fn set_filaments(&mut self, filaments: Vec<Filament>) {
        self.filaments = filaments;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn empty_filament_is_rejected() {
        assert!(matches!(
            Filament::new(vec![]),
            Err(GeometryError::TooFewPoints { count: 0 })
        ));
    }

    #[test]
    fn center_of_mass_is_point_mean() {
        let f = Filament::new(vec![p(0.0, 2.0, 1.0), p(0.0, 4.0, -1.0)]).unwrap();
        assert_eq!(f.center_of_mass(), p(0.0, 3.0, 0.0));
        assert!((f.center_of_mass_angle() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn closed_filament_unique_points_drop_duplicate() {
        let f = Filament::new(vec![
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
        ])
        .unwrap();
        assert!(f.is_closed());
        assert_eq!(f.unique_points().len(), 3);

        let open = Filament::new(vec![p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]).unwrap();
        assert!(!open.is_closed());
        assert_eq!(open.unique_points().len(), 2);
    }

    #[test]
    fn angle_bounds_cover_all_points() {
        let f = Filament::new(vec![p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)]).unwrap();
        let (lo, hi) = f.toroidal_angle_bounds();
        assert!(lo.abs() < 1e-12);
        assert!((hi - FRAC_PI_2).abs() < 1e-12);
    }
}
