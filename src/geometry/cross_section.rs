use tracing::warn;

use crate::error::ConfigError;

/// Coil cross-section swept along each filament.
///
/// The reference section lies in the `z = 0` plane with its thickness along
/// the x axis and, for rectangles, its width along the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossSection {
    /// Circular section of the given radius [cm].
    Circle { radius: f64 },
    /// Rectangular section, `width` and `thickness` in [cm].
    Rectangle { width: f64, thickness: f64 },
}

impl CrossSection {
    /// Largest dimension of the section, used to size angular tolerances.
    #[must_use]
    pub fn characteristic_length(&self) -> f64 {
        match *self {
            Self::Circle { radius } => radius,
            Self::Rectangle { width, thickness } => width.max(thickness),
        }
    }

    /// Returns `true` for sections whose in-plane orientation matters.
    #[must_use]
    pub fn is_rectangle(&self) -> bool {
        matches!(self, Self::Rectangle { .. })
    }

    /// Shape name as used in configuration.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Rectangle { .. } => "rectangle",
        }
    }

    /// Section definition in the form understood by the geometry kernel.
    ///
    /// Rectangles are given as `width {thickness} height {width}` because the
    /// kernel's width runs along the x axis.
    #[must_use]
    pub fn kernel_descriptor(&self) -> String {
        match *self {
            Self::Circle { radius } => format!("circle radius {radius}"),
            Self::Rectangle { width, thickness } => {
                format!("rectangle width {thickness} height {width}")
            }
        }
    }
}

/// Builds a [`CrossSection`] from a shape tag and its dimension list.
///
/// * `"circle"` expects `[radius]`; extra values are ignored with a warning.
/// * `"rectangle"` expects exactly `[width, thickness]`.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unknown shape, a wrong number of
/// dimensions, or a dimension that is not strictly positive.
pub fn parse_cross_section(shape: &str, dimensions: &[f64]) -> Result<CrossSection, ConfigError> {
    let section = match shape {
        "circle" => {
            let Some(&radius) = dimensions.first() else {
                return Err(ConfigError::WrongDimensionCount {
                    shape: "circle",
                    expected: 1,
                    found: 0,
                });
            };
            if dimensions.len() > 1 {
                warn!(
                    extra = dimensions.len() - 1,
                    "more than one length dimension given for a circular cross-section; \
                     using the first as the radius (did you mean \"rectangle\"?)"
                );
            }
            CrossSection::Circle { radius }
        }
        "rectangle" => {
            let &[width, thickness] = dimensions else {
                return Err(ConfigError::WrongDimensionCount {
                    shape: "rectangle",
                    expected: 2,
                    found: dimensions.len(),
                });
            };
            CrossSection::Rectangle { width, thickness }
        }
        other => return Err(ConfigError::UnknownShape(other.to_owned())),
    };

    match section {
        CrossSection::Circle { radius } => check_positive("radius", radius)?,
        CrossSection::Rectangle { width, thickness } => {
            check_positive("width", width)?;
            check_positive("thickness", thickness)?;
        }
    }

    Ok(section)
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { name, value })
    }
}
