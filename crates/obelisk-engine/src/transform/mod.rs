//! Per-frame transform math.
//!
//! Pure functions only: the rotation law and the model/view/projection
//! matrices are computed here without touching the clock, the window, or the
//! GPU, so both can be unit-tested in isolation.

mod matrices;
mod rotation;

pub use matrices::{FOV_Y_DEGREES, Matrices, VIEW_OFFSET, Z_FAR, Z_NEAR};
pub use rotation::{DEGREES_PER_SECOND, next_rotation};
