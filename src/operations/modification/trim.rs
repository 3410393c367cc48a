use tracing::debug;

use crate::error::{OperationError, Result};

/// How swept coil solids are cut to the modeled toroidal extent.
///
/// Filament selection already limits the coils to those overlapping the
/// extent; trimming would additionally cut the solids at the bounding planes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrimStrategy {
    /// Keep whole coils, including parts reaching past the extent.
    #[default]
    NoTrim,
    /// Intersect the coils with a wedge spanning the extent. Reserved for a
    /// kernel adapter with boolean support; not available yet.
    ToroidalWedge,
}

impl TrimStrategy {
    /// Checks that the strategy can be applied, before any solid is built.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unsupported`] for [`TrimStrategy::ToroidalWedge`].
    pub fn ensure_supported(self) -> Result<()> {
        match self {
            Self::NoTrim => Ok(()),
            Self::ToroidalWedge => Err(OperationError::Unsupported(
                "trimming magnets to the toroidal extent".into(),
            )
            .into()),
        }
    }

    /// Applies the strategy to the swept solids.
    ///
    /// # Errors
    ///
    /// Same as [`TrimStrategy::ensure_supported`].
    pub fn apply<S>(self, solids: Vec<S>) -> Result<Vec<S>> {
        self.ensure_supported()?;
        debug!(count = solids.len(), "leaving magnet solids untrimmed");
        Ok(solids)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoilError;

    #[test]
    fn no_trim_returns_solids_unchanged() {
        let solids = TrimStrategy::default().apply(vec![3, 1, 2]).unwrap();
        assert_eq!(solids, vec![3, 1, 2]);
    }

    #[test]
    fn support_is_known_up_front() {
        assert!(TrimStrategy::NoTrim.ensure_supported().is_ok());
        assert!(TrimStrategy::ToroidalWedge.ensure_supported().is_err());
    }

    #[test]
    fn wedge_trim_is_unsupported() {
        let err = TrimStrategy::ToroidalWedge.apply(vec![1]).unwrap_err();
        assert!(matches!(
            err,
            CoilError::Operation(OperationError::Unsupported(_))
        ));
    }
}
