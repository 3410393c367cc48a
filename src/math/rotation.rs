use super::{Matrix4, UnitVector3};

/// Builds a 4x4 rotation matrix around a unit axis through the origin (Rodrigues).
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn rotation_matrix(axis: &UnitVector3, angle: f64) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[rustfmt::skip]
    let m = Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    );
    m
}
