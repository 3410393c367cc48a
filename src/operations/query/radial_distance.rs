use crate::geometry::Filament;
use crate::math::radial_distance;

/// Computes the mean distance of all filament points from the device axis.
///
/// Serves as the length scale for the toroidal selection tolerance, so it is
/// evaluated over the unfiltered filaments.
pub struct AverageRadialDistance<'a> {
    filaments: &'a [Filament],
}

impl<'a> AverageRadialDistance<'a> {
    /// Creates a new `AverageRadialDistance` query.
    #[must_use]
    pub fn new(filaments: &'a [Filament]) -> Self {
        Self { filaments }
    }

    /// Executes the query. Returns `None` when there are no points.
    #[must_use]
    pub fn execute(&self) -> Option<f64> {
        let (sum, count) = self
            .filaments
            .iter()
            .flat_map(Filament::points)
            .fold((0.0, 0usize), |(sum, count), p| {
                (sum + radial_distance(p), count + 1)
            });
        #[allow(clippy::cast_precision_loss)]
        let count_f = count as f64;
        (count > 0).then(|| sum / count_f)
    }
}
