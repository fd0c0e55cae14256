//! Obelisk engine crate.
//!
//! Owns the platform + GPU runtime pieces a demo application builds on:
//! window/event loop, wgpu device and surface, frame timing, shader
//! compilation, and the colored-mesh render path.

pub mod core;
pub mod device;
pub mod shader;
pub mod time;
pub mod transform;
pub mod window;

pub mod logging;
pub mod render;
