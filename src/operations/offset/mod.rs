mod concentric_fill;
mod miter_offset;

pub use concentric_fill::{ConcentricFill, MAX_FILL_ITERATIONS};
pub use miter_offset::MiterOffset;
