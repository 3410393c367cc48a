mod coil_surface;
mod radial_distance;

pub use coil_surface::CoilSurfaceRulings;
pub use radial_distance::AverageRadialDistance;
