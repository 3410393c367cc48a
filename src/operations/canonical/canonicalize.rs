use std::collections::HashSet;

use tracing::warn;

use crate::error::GeometryError;
use crate::geometry::Filament;
use crate::math::{radial_distance, Point3};

/// What to do with a filament that never crosses the `z = 0` plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCrossing {
    /// Fail with [`GeometryError::NoZCrossing`].
    #[default]
    Error,
    /// Keep the input point order and only deduplicate and close.
    KeepOrder,
}

/// Reorders one filament into canonical form.
///
/// The result starts at the outboard-most midplane crossing, initially moves
/// towards increasing z, contains no repeated points and is closed
/// (`first == last`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalizeFilament {
    missing_crossing: MissingCrossing,
}

impl CanonicalizeFilament {
    /// Creates a new `CanonicalizeFilament` operation.
    #[must_use]
    pub fn new(missing_crossing: MissingCrossing) -> Self {
        Self { missing_crossing }
    }

    /// Executes the operation on `filament`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoZCrossing`] if the filament has no midplane
    /// crossing and the policy is [`MissingCrossing::Error`], or
    /// [`GeometryError::TooFewPoints`] if fewer than three distinct points
    /// remain.
    pub fn execute(&self, filament: &Filament) -> Result<Filament, GeometryError> {
        let points = filament.points();

        let ordered = match outboard_crossing(points) {
            Some(start) => rotate_to_start(points, start),
            None => match self.missing_crossing {
                MissingCrossing::Error => return Err(GeometryError::NoZCrossing),
                MissingCrossing::KeepOrder => {
                    warn!(
                        points = points.len(),
                        "filament has no midplane crossing; keeping its input start point"
                    );
                    points.to_vec()
                }
            },
        };

        let mut unique = remove_duplicates(ordered);
        if unique.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: unique.len(),
            });
        }
        unique.push(unique[0]);

        Filament::new(unique)
    }
}

/// Index of the outboard-most point at which the filament crosses `z = 0`.
///
/// A crossing is a consecutive pair whose z-coordinates have strictly
/// opposite signs (NaN never qualifies); the first point of the pair is the
/// candidate. Among the
/// candidates the one farthest from the device axis wins, the earliest on
/// ties.
#[must_use]
pub fn outboard_crossing(points: &[Point3]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, pair) in points.windows(2).enumerate() {
        let product = pair[0].z * pair[1].z;
        if product.is_nan() || product >= 0.0 {
            continue;
        }
        let radius = radial_distance(&pair[0]);
        if best.is_none_or(|(_, r)| r < radius) {
            best = Some((index, radius));
        }
    }
    best.map(|(index, _)| index)
}

/// Cyclically shifts `points` so that `start` comes first.
///
/// If z decreases right after `start`, the traversal direction is reversed
/// while `start` stays in front.
fn rotate_to_start(points: &[Point3], start: usize) -> Vec<Point3> {
    let n = points.len();
    if points[start].z > points[start + 1].z {
        (0..n).map(|k| points[(start + n - k) % n]).collect()
    } else {
        points[start..].iter().chain(&points[..start]).copied().collect()
    }
}

/// Drops every point equal to an earlier one, keeping first-seen order.
fn remove_duplicates(points: Vec<Point3>) -> Vec<Point3> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .into_iter()
        .filter(|p| seen.insert(point_key(p)))
        .collect()
}

/// Exact bitwise key; `-0.0` and `0.0` compare equal.
#[allow(clippy::float_cmp)]
fn point_key(p: &Point3) -> [u64; 3] {
    [p.x, p.y, p.z].map(|c| if c == 0.0 { 0.0_f64.to_bits() } else { c.to_bits() })
}
