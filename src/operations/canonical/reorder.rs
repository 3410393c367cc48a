#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::GeometryError;
use crate::geometry::Filament;
use crate::operations::selection::sort_by_signed_toroidal_angle;

use super::CanonicalizeFilament;

/// Canonicalizes every filament of a selection and restores toroidal order.
///
/// Filaments are processed independently (concurrently with the `parallel`
/// feature). The result is ordered by the signed toroidal angle of each
/// center of mass in `(-π, π]`, so filaments the selection window picked up
/// just below `φ = 0` lead the set.
pub struct CanonicalizeFilaments {
    filament: CanonicalizeFilament,
}

impl CanonicalizeFilaments {
    /// Creates a new `CanonicalizeFilaments` operation.
    #[must_use]
    pub fn new(filament: CanonicalizeFilament) -> Self {
        Self { filament }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Filament`] carrying the index (in the input
    /// order) of a filament that could not be canonicalized.
    pub fn execute(&self, filaments: &[Filament]) -> Result<Vec<Filament>, GeometryError> {
        let op = &self.filament;
        let canonicalize = |(index, filament): (usize, &Filament)| {
            op.execute(filament).map_err(|e| e.in_filament(index))
        };

        #[cfg(feature = "parallel")]
        let canonical: Vec<Filament> = filaments
            .par_iter()
            .enumerate()
            .map(canonicalize)
            .collect::<Result<_, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let canonical: Vec<Filament> = filaments
            .iter()
            .enumerate()
            .map(canonicalize)
            .collect::<Result<_, _>>()?;

        debug!(count = canonical.len(), "canonicalized filaments");

        Ok(sort_by_signed_toroidal_angle(canonical))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn square_at(phi_deg: f64) -> Filament {
        let (s, c) = phi_deg.to_radians().sin_cos();
        let pts = [(10.0, -1.0), (10.0, 1.0), (8.0, 1.0), (8.0, -1.0)]
            .iter()
            .map(|&(r, z)| Point3::new(r * c, r * s, z))
            .collect();
        Filament::new(pts).unwrap()
    }

    #[test]
    fn output_is_closed_and_sorted() {
        let input = vec![square_at(40.0), square_at(5.0), square_at(20.0)];
        let out = CanonicalizeFilaments::new(CanonicalizeFilament::default())
            .execute(&input)
            .unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(Filament::is_closed));
        let angles: Vec<f64> = out.iter().map(Filament::center_of_mass_angle).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn filaments_below_zero_lead_the_output() {
        let input = vec![square_at(5.0), square_at(85.0), square_at(359.0)];
        let out = CanonicalizeFilaments::new(CanonicalizeFilament::default())
            .execute(&input)
            .unwrap();
        let degrees: Vec<f64> = out
            .iter()
            .map(|f| {
                let c = f.center_of_mass();
                c.y.atan2(c.x).to_degrees()
            })
            .collect();
        assert!((degrees[0] + 1.0).abs() < 1e-9, "{degrees:?}");
        assert!((degrees[1] - 5.0).abs() < 1e-9, "{degrees:?}");
        assert!((degrees[2] - 85.0).abs() < 1e-9, "{degrees:?}");
    }

    #[test]
    fn failure_reports_filament_index() {
        let flat = Filament::new(vec![
            Point3::new(10.0, 0.0, 1.0),
            Point3::new(8.0, 0.0, 1.0),
            Point3::new(9.0, 0.0, 2.0),
        ])
        .unwrap();
        let err = CanonicalizeFilaments::new(CanonicalizeFilament::default())
            .execute(&[square_at(0.0), flat])
            .unwrap_err();
        match err {
            GeometryError::Filament { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, GeometryError::NoZCrossing));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
