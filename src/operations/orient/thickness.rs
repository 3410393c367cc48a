use crate::error::GeometryError;
use crate::geometry::{AxisRotation, OrientationFrame, ThicknessAlignment};
use crate::math::{
    normalize, project_onto, reject_from, signed_angle, signed_rotation, Point3, UnitVector3,
};

/// Computes the in-plane turn that makes a rectangular section face the
/// device axis.
///
/// The reference thickness vector is first carried along by the tangent
/// alignment `rotation`: its component orthogonal to the rotation axis turns
/// by the rotation angle, the parallel component is unchanged. The section is
/// then turned about the tangent until the thickness vector lies along the
/// vertex position projected into the section plane.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the vertex position is parallel
/// to the tangent, leaving no radial direction in the section plane.
pub fn align_thickness(
    position: &Point3,
    tangent: &UnitVector3,
    rotation: Option<&AxisRotation>,
) -> Result<ThicknessAlignment, GeometryError> {
    let reference = OrientationFrame::reference_thickness();

    let rotated = match rotation {
        Some(r) => {
            let parallel = project_onto(&reference, &r.axis);
            let perp = reject_from(&reference, &r.axis);
            let orth = r.axis.cross(&perp);
            signed_rotation(r.angle, &perp, &orth) + parallel
        }
        None => reference,
    };
    let rotated = normalize(&rotated)?;

    let direction = normalize(&reject_from(&position.coords, tangent))?;
    let facing_angle = signed_angle(&rotated, &direction, tangent);

    Ok(ThicknessAlignment {
        rotated,
        direction,
        facing_angle,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{rotation_matrix, Vector3};

    #[test]
    fn rotated_thickness_matches_matrix_rotation() {
        let axis = UnitVector3::new_normalize(Vector3::new(0.3, -1.0, 0.2));
        let rotation = AxisRotation { axis, angle: 1.1 };
        let tangent = UnitVector3::new_normalize(
            rotation_matrix(&axis, 1.1).transform_vector(&Vector3::z()),
        );
        let position = Point3::new(7.0, 2.0, 0.5);

        let alignment = align_thickness(&position, &tangent, Some(&rotation)).unwrap();
        let expected = rotation_matrix(&axis, 1.1).transform_vector(&Vector3::x());
        assert_abs_diff_eq!(alignment.rotated.into_inner(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(alignment.rotated.dot(tangent.as_ref()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn facing_angle_turns_thickness_onto_radial_direction() {
        // Tangent along +y at a point on the +x axis: the section plane is xz.
        let tangent = UnitVector3::new_normalize(Vector3::y());
        let rotation = AxisRotation {
            axis: UnitVector3::new_normalize(Vector3::z().cross(&Vector3::y())),
            angle: FRAC_PI_2,
        };
        let position = Point3::new(10.0, 0.0, 3.0);

        let alignment = align_thickness(&position, &tangent, Some(&rotation)).unwrap();
        assert_abs_diff_eq!(alignment.direction.into_inner(), Vector3::new(10.0, 0.0, 3.0).normalize(), epsilon = 1e-12);

        let turned = rotation_matrix(&tangent, alignment.facing_angle)
            .transform_vector(&alignment.rotated.into_inner());
        assert_abs_diff_eq!(turned, alignment.direction.into_inner(), epsilon = 1e-12);
    }

    #[test]
    fn unrotated_section_keeps_reference_thickness() {
        let tangent = UnitVector3::new_normalize(Vector3::z());
        let position = Point3::new(0.0, 5.0, 0.0);
        let alignment = align_thickness(&position, &tangent, None).unwrap();
        assert_abs_diff_eq!(alignment.rotated.into_inner(), Vector3::x(), epsilon = 1e-12);
        assert_abs_diff_eq!(alignment.facing_angle, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn position_along_tangent_is_degenerate() {
        let tangent = UnitVector3::new_normalize(Vector3::x());
        let rotation = AxisRotation {
            axis: UnitVector3::new_normalize(Vector3::y()),
            angle: FRAC_PI_2,
        };
        let result = align_thickness(&Point3::new(4.0, 0.0, 0.0), &tangent, Some(&rotation));
        assert!(matches!(result, Err(GeometryError::ZeroVector)));
    }
}
