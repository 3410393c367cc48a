use crate::error::GeometryError;
use crate::geometry::{AxisRotation, CrossSection, Filament, OrientationFrame};
use crate::math::{normalize, Point3, UnitVector3, TOLERANCE};

use super::align_thickness;

/// Computes the cross-section placement at every vertex of a closed filament.
///
/// One frame is produced per distinct vertex; the closing duplicate shares
/// the frame of vertex 0 (see [`frame_for_vertex`]).
pub struct ComputeFrames<'a> {
    filament: &'a Filament,
    cross_section: CrossSection,
}

impl<'a> ComputeFrames<'a> {
    /// Creates a new `ComputeFrames` operation.
    #[must_use]
    pub fn new(filament: &'a Filament, cross_section: CrossSection) -> Self {
        Self {
            filament,
            cross_section,
        }
    }

    /// Executes the operation.
    ///
    /// The tangent at each vertex is the normalized chord between its two
    /// neighbors, wrapping around the loop.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] for loops with fewer than three
    /// vertices, or the first error raised by [`frame_at`].
    pub fn execute(&self) -> Result<Vec<OrientationFrame>, GeometryError> {
        let vertices = self.filament.unique_points();
        let m = vertices.len();
        if m < 3 {
            return Err(GeometryError::TooFewPoints { count: m });
        }

        (0..m)
            .map(|i| {
                let prev = vertices[(i + m - 1) % m];
                let next = vertices[(i + 1) % m];
                let tangent = normalize(&(next - prev))?;
                frame_at(vertices[i], tangent, &self.cross_section)
            })
            .collect()
    }

    /// Frame at the path origin, the one used to place the swept section.
    ///
    /// # Errors
    ///
    /// Same as [`ComputeFrames::execute`].
    pub fn origin_frame(&self) -> Result<OrientationFrame, GeometryError> {
        let vertices = self.filament.unique_points();
        let m = vertices.len();
        if m < 3 {
            return Err(GeometryError::TooFewPoints { count: m });
        }
        let tangent = normalize(&(vertices[1] - vertices[m - 1]))?;
        frame_at(vertices[0], tangent, &self.cross_section)
    }
}

/// Builds the frame for a section placed at `position` with normal `tangent`.
///
/// # Errors
///
/// Returns [`GeometryError::UndefinedAxis`] when the tangent points along
/// `-z`, and [`GeometryError::ZeroVector`] when a rectangular section has no
/// radial direction in its plane.
pub fn frame_at(
    position: Point3,
    tangent: UnitVector3,
    cross_section: &CrossSection,
) -> Result<OrientationFrame, GeometryError> {
    let normal = OrientationFrame::reference_normal();
    let cross = normal.cross(tangent.as_ref());

    let rotation = if cross.norm() < TOLERANCE {
        if normal.dot(tangent.as_ref()) < 0.0 {
            return Err(GeometryError::UndefinedAxis);
        }
        None
    } else {
        Some(AxisRotation {
            axis: normalize(&cross)?,
            angle: normal.dot(tangent.as_ref()).clamp(-1.0, 1.0).acos(),
        })
    };

    let thickness = if cross_section.is_rectangle() {
        Some(align_thickness(&position, &tangent, rotation.as_ref())?)
    } else {
        None
    };

    Ok(OrientationFrame {
        position,
        tangent,
        rotation,
        thickness,
    })
}

/// Looks up the frame of a path vertex, mapping the closing duplicate
/// (index `frames.len()`) back to vertex 0.
#[must_use]
pub fn frame_for_vertex(frames: &[OrientationFrame], vertex: usize) -> Option<&OrientationFrame> {
    if vertex == frames.len() {
        frames.first()
    } else {
        frames.get(vertex)
    }
}
