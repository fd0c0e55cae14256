//! Engine-facing application contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: a trait for startup/per-frame callbacks and the context
//! handed to each frame. Runtime internals never leak into user code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
