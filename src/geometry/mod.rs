pub mod cross_section;
pub mod extent;
pub mod filament;
pub mod frame;

pub use cross_section::{parse_cross_section, CrossSection};
pub use extent::ToroidalExtent;
pub use filament::{Filament, FilamentSet};
pub use frame::{AxisRotation, OrientationFrame, ThicknessAlignment};
