use crate::error::ConfigError;

/// Toroidal extent of the modeled device sector.
///
/// Constructed from degrees in `(0, 360]` and stored in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToroidalExtent {
    radians: f64,
}

impl ToroidalExtent {
    /// Creates a toroidal extent from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ToroidalExtentOutOfRange`] if `degrees` is not in
    /// `(0, 360]`.
    pub fn from_degrees(degrees: f64) -> Result<Self, ConfigError> {
        if degrees > 0.0 && degrees <= 360.0 {
            Ok(Self {
                radians: degrees.to_radians(),
            })
        } else {
            Err(ConfigError::ToroidalExtentOutOfRange(degrees))
        }
    }

    /// Extent in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// Extent in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }
}
