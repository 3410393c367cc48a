mod select;
mod window;

pub use select::{sort_by_signed_toroidal_angle, sort_by_toroidal_angle, SelectFilaments};
pub use window::ToroidalWindow;
