use thiserror::Error;

/// Top-level error type for the coil geometry pipeline.
#[derive(Debug, Error)]
pub enum CoilError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to read filament data: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating configuration, before any geometry work.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("magnet cross-section must be either \"circle\" or \"rectangle\", got {0:?}")]
    UnknownShape(String),

    #[error("{shape} cross-section expects {expected} dimension(s), got {found}")]
    WrongDimensionCount {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cross-section {name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("toroidal extent must lie in (0, 360] degrees, got {0}")]
    ToroidalExtentOutOfRange(f64),

    #[error("sampling modifier must be at least 1")]
    InvalidSampleMod,

    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Errors raised while reading filament records.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected `x y z current`, found {found} column(s)")]
    MissingColumns { line: usize, found: usize },

    #[error("line {line}, column {column}: invalid number {token:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("rotation axis undefined: tangent is anti-parallel to the cross-section normal")]
    UndefinedAxis,

    #[error("filament never crosses the midplane")]
    NoZCrossing,

    #[error("filament has {count} unique point(s), at least 3 are required")]
    TooFewPoints { count: usize },

    #[error("filament {index}: {source}")]
    Filament {
        index: usize,
        #[source]
        source: Box<GeometryError>,
    },
}

impl GeometryError {
    /// Attaches the index of the offending filament.
    #[must_use]
    pub fn in_filament(self, index: usize) -> Self {
        Self::Filament {
            index,
            source: Box::new(self),
        }
    }
}

/// Errors related to pipeline and kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("geometry kernel failed: {0}")]
    Kernel(String),
}

/// Convenience type alias for results using [`CoilError`].
pub type Result<T> = std::result::Result<T, CoilError>;
