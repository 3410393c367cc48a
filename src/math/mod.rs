pub mod rotation;
pub mod toroidal;
pub mod vector;

pub use rotation::rotation_matrix;
pub use toroidal::{radial_distance, toroidal_angle};
pub use vector::{normalize, project_onto, reject_from, signed_angle, signed_rotation};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D vector guaranteed to have unit length.
pub type UnitVector3 = nalgebra::Unit<Vector3>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
