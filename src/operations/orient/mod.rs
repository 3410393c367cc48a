mod frames;
mod thickness;

pub use frames::{frame_at, frame_for_vertex, ComputeFrames};
pub use thickness::align_thickness;
