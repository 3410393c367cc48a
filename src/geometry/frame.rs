use crate::math::{rotation_matrix, Matrix4, Point3, UnitVector3, Vector3};

/// Rotation about an axis through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    /// Unit rotation axis.
    pub axis: UnitVector3,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl AxisRotation {
    /// Homogeneous rotation matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        rotation_matrix(&self.axis, self.angle)
    }
}

/// In-plane correction turning a rectangular section towards the device axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessAlignment {
    /// Reference thickness direction after the tangent alignment.
    pub rotated: UnitVector3,
    /// Target thickness direction: the vertex position projected into the
    /// section plane.
    pub direction: UnitVector3,
    /// Signed angle about the tangent taking `rotated` onto `direction`.
    pub facing_angle: f64,
}

/// Placement of the cross-section at one filament vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFrame {
    /// Vertex the section is moved to.
    pub position: Point3,
    /// Unit tangent of the filament at `position`.
    pub tangent: UnitVector3,
    /// Rotation taking the reference normal onto the tangent. `None` when the
    /// tangent already coincides with the reference normal.
    pub rotation: Option<AxisRotation>,
    /// Facing correction, present for rectangular sections only.
    pub thickness: Option<ThicknessAlignment>,
}

impl OrientationFrame {
    /// Normal of the reference cross-section plane.
    #[must_use]
    pub fn reference_normal() -> Vector3 {
        Vector3::z()
    }

    /// Thickness direction of the reference cross-section.
    #[must_use]
    pub fn reference_thickness() -> Vector3 {
        Vector3::x()
    }

    /// Rotation angle from the reference normal to the tangent.
    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.rotation.map_or(0.0, |r| r.angle)
    }

    /// Rotation axis, if any rotation is needed.
    #[must_use]
    pub fn rotation_axis(&self) -> Option<UnitVector3> {
        self.rotation.map(|r| r.axis)
    }

    /// Full placement of a section defined around the origin in the `z = 0`
    /// plane: align to the tangent, face the device axis, then translate to
    /// `position`.
    #[must_use]
    pub fn transform(&self) -> Matrix4 {
        let mut m = self.rotation.map_or_else(Matrix4::identity, |r| r.matrix());
        if let Some(t) = &self.thickness {
            m = rotation_matrix(&self.tangent, t.facing_angle) * m;
        }
        Matrix4::new_translation(&self.position.coords) * m
    }
}
