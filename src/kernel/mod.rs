//! Adapter between the filament pipeline and a solid-modeling kernel.
//!
//! The orientation math lives in [`crate::operations::orient`]; this module
//! only decides which kernel calls a coil needs and in what order.

mod recording;

pub use recording::{PathData, PathId, RecordingKernel, SectionData, SectionId, SolidData, SolidId};

use tracing::debug;

use crate::error::Result;
use crate::geometry::{CrossSection, Filament, OrientationFrame};
use crate::math::Point3;
use crate::operations::orient::ComputeFrames;

/// Minimal set of kernel capabilities needed to sweep a coil.
pub trait SweepKernel {
    /// Handle of a path curve.
    type Path;
    /// Handle of a planar cross-section surface.
    type Section;
    /// Handle of a swept solid.
    type Solid;

    /// Creates a spline path through `points`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel rejects the path.
    fn create_path(&mut self, points: &[Point3]) -> Result<Self::Path>;

    /// Creates the reference section around the origin in the `z = 0` plane,
    /// thickness along x.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel rejects the section.
    fn create_cross_section(&mut self, cross_section: &CrossSection) -> Result<Self::Section>;

    /// Rotates and moves a reference section according to `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section handle is invalid.
    fn orient_cross_section(&mut self, section: &Self::Section, frame: &OrientationFrame)
        -> Result<()>;

    /// Sweeps `section` along `path`, consuming both.
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep fails.
    fn sweep(&mut self, section: Self::Section, path: Self::Path) -> Result<Self::Solid>;

    /// Tags a solid with the material it is assigned to in the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid handle is invalid.
    fn assign_material(&mut self, solid: &Self::Solid, tag: &str) -> Result<()>;
}

/// Sweeps one canonical filament into a coil solid.
pub struct SweepCoil<'a> {
    filament: &'a Filament,
    cross_section: CrossSection,
}

impl<'a> SweepCoil<'a> {
    /// Creates a new `SweepCoil` operation.
    #[must_use]
    pub fn new(filament: &'a Filament, cross_section: CrossSection) -> Self {
        Self {
            filament,
            cross_section,
        }
    }

    /// Executes the sweep on `kernel`.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if the section cannot be oriented at the path
    /// origin, or any error raised by the kernel.
    pub fn execute<K: SweepKernel>(&self, kernel: &mut K) -> Result<K::Solid> {
        let frame = ComputeFrames::new(self.filament, self.cross_section).origin_frame()?;
        debug!(
            points = self.filament.len(),
            rotation_angle = frame.rotation_angle(),
            "sweeping coil"
        );

        let path = kernel.create_path(self.filament.points())?;
        let section = kernel.create_cross_section(&self.cross_section)?;
        kernel.orient_cross_section(&section, &frame)?;
        kernel.sweep(section, path)
    }
}
