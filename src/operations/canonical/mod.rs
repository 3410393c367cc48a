mod canonicalize;
mod reorder;

pub use canonicalize::{outboard_crossing, CanonicalizeFilament, MissingCrossing};
pub use reorder::CanonicalizeFilaments;
