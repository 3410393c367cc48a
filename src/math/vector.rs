use crate::error::GeometryError;

use super::{UnitVector3, Vector3, TOLERANCE};

/// Normalizes `v` to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the length of `v` is below
/// [`TOLERANCE`].
pub fn normalize(v: &Vector3) -> Result<UnitVector3, GeometryError> {
    UnitVector3::try_new(*v, TOLERANCE).ok_or(GeometryError::ZeroVector)
}

/// Component of `v` parallel to `axis`.
#[must_use]
pub fn project_onto(v: &Vector3, axis: &UnitVector3) -> Vector3 {
    let a = axis.into_inner();
    a * v.dot(&a)
}

/// Component of `v` orthogonal to `axis`.
#[must_use]
pub fn reject_from(v: &Vector3, axis: &UnitVector3) -> Vector3 {
    v - project_onto(v, axis)
}

/// Rotates within the plane spanned by two orthogonal vectors of equal length.
///
/// Returns `cos(angle) * parallel + sin(angle) * orthogonal`: the result of
/// turning `parallel` by `angle` towards `orthogonal`. Combined with
/// [`project_onto`] / [`reject_from`] this rotates a vector about an axis
/// without building a rotation matrix.
#[must_use]
pub fn signed_rotation(angle: f64, parallel: &Vector3, orthogonal: &Vector3) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    parallel * cos + orthogonal * sin
}

/// Angle in `(-π, π]` that rotates `from` onto `to` about `axis`.
///
/// Both vectors are expected to lie in the plane normal to `axis`. The sign
/// follows the right-hand rule around `axis`.
#[must_use]
pub fn signed_angle(from: &UnitVector3, to: &UnitVector3, axis: &UnitVector3) -> f64 {
    let cos = from.dot(to.as_ref()).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if from.cross(to.as_ref()).dot(axis.as_ref()) < 0.0 {
        -angle
    } else {
        angle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let n = normalize(&v(3.0, 0.0, 4.0)).unwrap();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let result = normalize(&v(0.0, 0.0, 0.0));
        assert!(matches!(result, Err(GeometryError::ZeroVector)));

        let tiny = normalize(&v(1e-12, 0.0, 0.0));
        assert!(matches!(tiny, Err(GeometryError::ZeroVector)));
    }

    #[test]
    fn projection_and_rejection_recombine() {
        let axis = normalize(&v(1.0, 1.0, 0.0)).unwrap();
        let w = v(2.0, -1.0, 3.0);
        let par = project_onto(&w, &axis);
        let perp = reject_from(&w, &axis);
        assert_abs_diff_eq!(par + perp, w, epsilon = 1e-12);
        assert_abs_diff_eq!(perp.dot(axis.as_ref()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(par.cross(axis.as_ref()).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn signed_rotation_quarter_turn() {
        let rotated = signed_rotation(FRAC_PI_2, &v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(rotated, v(0.0, 1.0, 0.0), epsilon = 1e-12);

        let back = signed_rotation(-FRAC_PI_2, &v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(back, v(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn signed_angle_follows_right_hand_rule() {
        let x = UnitVector3::new_normalize(v(1.0, 0.0, 0.0));
        let y = UnitVector3::new_normalize(v(0.0, 1.0, 0.0));
        let z = UnitVector3::new_normalize(v(0.0, 0.0, 1.0));

        assert_abs_diff_eq!(signed_angle(&x, &y, &z), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_angle(&y, &x, &z), -FRAC_PI_2, epsilon = 1e-12);
        let neg_x = UnitVector3::new_normalize(v(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(signed_angle(&x, &neg_x, &z), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_angle(&x, &x, &z), 0.0, epsilon = 1e-12);
    }
}
