//! GPU rendering subsystem.
//!
//! Owns the colored-mesh render path: the interleaved vertex format, the
//! device-resident mesh buffer, and the pipeline that consumes both plus the
//! model/view/projection uniform block.
//!
//! Convention: object-space positions, right-handed, +Y up; the vertex stage
//! maps to clip space via `proj * view * model`.

mod ctx;
mod mesh;
mod pipeline;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, ResourceError, Vertex};
pub use pipeline::MeshRenderer;
