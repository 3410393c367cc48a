use tracing::{debug, info};

use crate::geometry::Filament;

use super::ToroidalWindow;

/// Keeps the filaments overlapping a toroidal window, ordered by the toroidal
/// angle of their center of mass.
pub struct SelectFilaments {
    window: ToroidalWindow,
}

impl SelectFilaments {
    /// Creates a new `SelectFilaments` operation.
    #[must_use]
    pub fn new(window: ToroidalWindow) -> Self {
        Self { window }
    }

    /// Executes the selection.
    #[must_use]
    pub fn execute(&self, filaments: Vec<Filament>) -> Vec<Filament> {
        let total = filaments.len();
        debug!(
            min_rad = self.window.min_rad(),
            max_rad = self.window.max_rad(),
            tolerance = self.window.tolerance(),
            "selecting filaments in toroidal window"
        );

        let retained: Vec<Filament> = filaments
            .into_iter()
            .filter(|f| self.window.overlaps(f))
            .collect();
        info!(retained = retained.len(), total, "filtered filaments by toroidal extent");

        sort_by_toroidal_angle(retained)
    }
}

/// Stable sort by center-of-mass toroidal angle in `[0, 2π)`.
#[must_use]
pub fn sort_by_toroidal_angle(filaments: Vec<Filament>) -> Vec<Filament> {
    sort_by_angle(filaments, Filament::center_of_mass_angle)
}

/// Stable sort by the signed center-of-mass toroidal angle in `(-π, π]`.
///
/// Filaments just below `φ = 0` come before those just above it, so a sector
/// starting at `φ = 0` stays contiguous when its window reaches back past 2π.
#[must_use]
pub fn sort_by_signed_toroidal_angle(filaments: Vec<Filament>) -> Vec<Filament> {
    sort_by_angle(filaments, |f| {
        let c = f.center_of_mass();
        c.y.atan2(c.x)
    })
}

fn sort_by_angle(filaments: Vec<Filament>, angle: impl Fn(&Filament) -> f64) -> Vec<Filament> {
    let mut keyed: Vec<(f64, Filament)> = filaments
        .into_iter()
        .map(|f| (angle(&f), f))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, f)| f).collect()
}
