use crate::error::{OperationError, Result};
use crate::geometry::FilamentSet;
use crate::math::Point3;

/// Straight segments joining corresponding points of neighboring filaments.
///
/// Skinning consecutive rulings yields a surface through the whole coil set.
/// Canonical filaments all start at their outboard midplane crossing, so
/// equal indices mark comparable positions on neighboring coils.
pub struct CoilSurfaceRulings<'a> {
    set: &'a FilamentSet,
}

impl<'a> CoilSurfaceRulings<'a> {
    /// Creates a new `CoilSurfaceRulings` query.
    #[must_use]
    pub fn new(set: &'a FilamentSet) -> Self {
        Self { set }
    }

    /// Executes the query, returning one list of rulings per neighboring
    /// filament pair.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if two neighboring filaments
    /// have different point counts.
    pub fn execute(&self) -> Result<Vec<Vec<(Point3, Point3)>>> {
        self.set
            .filaments()
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let (a, b) = (&pair[0], &pair[1]);
                if a.len() != b.len() {
                    return Err(OperationError::InvalidInput(format!(
                        "filaments {index} and {} have {} and {} points",
                        index + 1,
                        a.len(),
                        b.len()
                    ))
                    .into());
                }
                Ok(a.points()
                    .iter()
                    .zip(b.points())
                    .map(|(p, q)| (*p, *q))
                    .collect())
            })
            .collect()
    }
}
