use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CoilError, ConfigError, Result};
use crate::geometry::{
    parse_cross_section, CrossSection, Filament, FilamentSet, OrientationFrame, ToroidalExtent,
};
use crate::kernel::{SweepCoil, SweepKernel};
use crate::operations::canonical::{CanonicalizeFilament, CanonicalizeFilaments, MissingCrossing};
use crate::operations::modification::TrimStrategy;
use crate::operations::orient::ComputeFrames;
use crate::operations::query::AverageRadialDistance;
use crate::operations::selection::{SelectFilaments, ToroidalWindow};
use crate::parse::ExtractFilaments;

/// Conversion factor from meters to centimeters.
pub const M2CM: f64 = 100.0;

/// Parameters for building a set of magnet coils.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnetConfig {
    /// Coil cross-section.
    pub cross_section: CrossSection,

    /// Toroidal extent to model.
    pub toroidal_extent: ToroidalExtent,

    /// Number of header lines in the filament file.
    pub start_line: usize,

    /// Keep every n-th filament point.
    pub sample_mod: usize,

    /// Factor converting filament file units to [cm].
    pub scale: f64,

    /// Material tag assigned to the magnets in the neutronics model.
    pub mat_tag: String,

    /// Trimming of the swept solids to the toroidal extent.
    pub trim: TrimStrategy,

    /// Handling of filaments without a midplane crossing.
    pub missing_crossing: MissingCrossing,
}

impl MagnetConfig {
    /// Creates a configuration with default sampling parameters.
    ///
    /// * `shape` / `dimensions` - Cross-section, e.g. `("circle", &[r])` or
    ///   `("rectangle", &[width, thickness])`, in [cm].
    /// * `toroidal_extent` - Modeled extent in degrees, in `(0, 360]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the cross-section or extent is invalid.
    pub fn new(
        shape: &str,
        dimensions: &[f64],
        toroidal_extent: f64,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self::from_parts(
            parse_cross_section(shape, dimensions)?,
            ToroidalExtent::from_degrees(toroidal_extent)?,
        ))
    }

    /// Creates a configuration from already validated parts.
    #[must_use]
    pub fn from_parts(cross_section: CrossSection, toroidal_extent: ToroidalExtent) -> Self {
        Self {
            cross_section,
            toroidal_extent,
            start_line: 3,
            sample_mod: 1,
            scale: M2CM,
            mat_tag: "magnets".to_owned(),
            trim: TrimStrategy::NoTrim,
            missing_crossing: MissingCrossing::Error,
        }
    }

    /// Sets the number of header lines.
    #[must_use]
    pub fn with_start_line(mut self, start_line: usize) -> Self {
        self.start_line = start_line;
        self
    }

    /// Sets the sampling modifier.
    #[must_use]
    pub fn with_sample_mod(mut self, sample_mod: usize) -> Self {
        self.sample_mod = sample_mod;
        self
    }

    /// Sets the unit scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the material tag.
    #[must_use]
    pub fn with_mat_tag(mut self, mat_tag: impl Into<String>) -> Self {
        self.mat_tag = mat_tag.into();
        self
    }

    /// Sets the trim strategy.
    #[must_use]
    pub fn with_trim(mut self, trim: TrimStrategy) -> Self {
        self.trim = trim;
        self
    }

    /// Sets the policy for filaments without a midplane crossing.
    #[must_use]
    pub fn with_missing_crossing(mut self, missing_crossing: MissingCrossing) -> Self {
        self.missing_crossing = missing_crossing;
        self
    }

    /// Checks the sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSampleMod`] for a zero sampling modifier
    /// and [`ConfigError::InvalidScale`] for a non-finite or non-positive
    /// scale.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.sample_mod == 0 {
            return Err(ConfigError::InvalidSampleMod);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Builds magnet coil geometry from filament data.
///
/// The pipeline reads the filaments, keeps those overlapping the modeled
/// toroidal extent, brings each into canonical form and finally sweeps the
/// cross-section along every filament through a [`SweepKernel`].
#[derive(Debug, Clone)]
pub struct MagnetSet {
    config: MagnetConfig,
}

impl MagnetSet {
    /// Creates a magnet set from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: MagnetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    /// Reads the filament file at `path` and builds the filament set.
    ///
    /// # Errors
    ///
    /// See [`MagnetSet::build_filaments`].
    pub fn build_filaments_from_path(&self, path: impl AsRef<Path>) -> Result<FilamentSet> {
        let filaments = self.extractor().execute_path(path)?;
        self.process(filaments)
    }

    /// Reads filament data from `reader` and builds the filament set.
    ///
    /// # Errors
    ///
    /// Returns a parse or I/O error for unreadable data and a geometry error
    /// (with the filament index) for a filament that cannot be canonicalized.
    pub fn build_filaments<R: BufRead>(&self, reader: R) -> Result<FilamentSet> {
        let filaments = self.extractor().execute(reader)?;
        self.process(filaments)
    }

    /// Computes the orientation frames of every filament in `set`.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::error::GeometryError`] wrapped with its filament index.
    pub fn compute_frames(&self, set: &FilamentSet) -> Result<Vec<Vec<OrientationFrame>>> {
        set.filaments()
            .iter()
            .enumerate()
            .map(|(index, filament)| {
                ComputeFrames::new(filament, *set.cross_section())
                    .execute()
                    .map_err(|e| CoilError::from(e.in_filament(index)))
            })
            .collect()
    }

    /// Sweeps every filament of `set` into a coil solid.
    ///
    /// # Errors
    ///
    /// Fails before touching the kernel if the trim strategy is unsupported.
    /// Otherwise returns the first orientation or kernel error; geometry
    /// errors carry the filament index.
    pub fn build_magnet_coils<K: SweepKernel>(
        &self,
        set: &FilamentSet,
        kernel: &mut K,
    ) -> Result<Vec<K::Solid>> {
        self.config.trim.ensure_supported()?;
        info!(coils = set.len(), "constructing magnet coils");

        let mut solids = Vec::with_capacity(set.len());
        for (index, filament) in set.filaments().iter().enumerate() {
            let solid = SweepCoil::new(filament, *set.cross_section())
                .execute(kernel)
                .map_err(|e| match e {
                    CoilError::Geometry(g) => g.in_filament(index).into(),
                    other => other,
                })?;
            kernel.assign_material(&solid, &self.config.mat_tag)?;
            solids.push(solid);
        }

        self.config.trim.apply(solids)
    }

    fn extractor(&self) -> ExtractFilaments {
        ExtractFilaments::new(
            self.config.start_line,
            self.config.sample_mod,
            self.config.scale,
        )
    }

    fn process(&self, filaments: Vec<Filament>) -> Result<FilamentSet> {
        let cross_section = self.config.cross_section;
        let extent = self.config.toroidal_extent;

        let Some(avg_radial_distance) = AverageRadialDistance::new(&filaments).execute() else {
            warn!("no filament points to build magnets from");
            return Ok(FilamentSet::new(Vec::new(), cross_section, extent));
        };
        info!(avg_radial_distance, "computed average radial distance of filaments");

        let window = ToroidalWindow::new(extent, &cross_section, avg_radial_distance);
        let selected = SelectFilaments::new(window).execute(filaments);

        let canonical = CanonicalizeFilaments::new(CanonicalizeFilament::new(
            self.config.missing_crossing,
        ))
        .execute(&selected)?;

        Ok(FilamentSet::new(canonical, cross_section, extent))
    }
}
