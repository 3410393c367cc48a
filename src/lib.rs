//! Filament geometry pipeline for stellarator magnet coils.
//!
//! Reads coil filament point loci, selects the filaments of a toroidal
//! sector, brings each into a canonical closed form and computes the frames
//! needed to sweep a coil cross-section along it. Building the solids is left
//! to a geometry kernel behind [`kernel::SweepKernel`].

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod magnet_set;
pub mod math;
pub mod operations;
pub mod parse;

pub use error::{CoilError, Result};
pub use magnet_set::{MagnetConfig, MagnetSet};
