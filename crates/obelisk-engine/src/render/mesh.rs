use bytemuck::{Pod, Zeroable};
use thiserror::Error;
use wgpu::util::DeviceExt;

/// Errors from device resource allocation. Fatal at startup; no partial or
/// degraded mode exists.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("device buffer allocation failed: {0}")]
    DeviceAllocation(String),
}

/// Interleaved position + color vertex.
///
/// The attribute layout below is derived from this struct's own field order,
/// so the descriptor cannot drift from the uploaded bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Release state of a device resource.
///
/// `acquire` returns true exactly once; later calls return false, making a
/// double release a deterministic no-op.
#[derive(Debug, Default)]
struct ReleaseState {
    released: bool,
}

impl ReleaseState {
    fn acquire(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        true
    }

    fn is_released(&self) -> bool {
        self.released
    }
}

/// A device-resident, non-indexed triangle mesh.
///
/// Created once before the frame loop and fully populated in a single
/// upload. Contents may be replaced wholesale with [`Mesh::rewrite`], but the
/// vertex count is fixed at creation.
pub struct Mesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    release_state: ReleaseState,
}

impl Mesh {
    /// Allocates device memory for `vertices` and copies the data in.
    ///
    /// Runs under an out-of-memory error scope so allocation failure surfaces
    /// as [`ResourceError::DeviceAllocation`] instead of a device panic.
    pub fn create(
        device: &wgpu::Device,
        label: &str,
        vertices: &[Vertex],
    ) -> Result<Self, ResourceError> {
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(ResourceError::DeviceAllocation(err.to_string()));
        }

        Ok(Self {
            buffer,
            vertex_count: vertices.len() as u32,
            release_state: ReleaseState::default(),
        })
    }

    /// Replaces the buffer contents. `vertices` must match the creation count.
    pub fn rewrite(&self, queue: &wgpu::Queue, vertices: &[Vertex]) {
        debug_assert_eq!(vertices.len() as u32, self.vertex_count);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn is_released(&self) -> bool {
        self.release_state.is_released()
    }

    pub(crate) fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Frees the device memory now instead of waiting for drop.
    ///
    /// Releasing twice is a no-op: `wgpu::Buffer::destroy` is idempotent and
    /// the flag keeps the contract explicit.
    pub fn release(&mut self) {
        if !self.release_state.acquire() {
            log::debug!("mesh released twice; ignoring");
            return;
        }
        self.buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stride_matches_interleaving() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn layout_attributes_cover_position_then_color() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 2);

        let position = &layout.attributes[0];
        assert_eq!(position.shader_location, 0);
        assert_eq!(position.offset, 0);
        assert_eq!(position.format, wgpu::VertexFormat::Float32x3);

        let color = &layout.attributes[1];
        assert_eq!(color.shader_location, 1);
        assert_eq!(color.offset, 12);
        assert_eq!(color.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn release_frees_exactly_once() {
        let mut state = ReleaseState::default();
        assert!(!state.is_released());
        // First release frees the device memory.
        assert!(state.acquire());
        assert!(state.is_released());
    }

    #[test]
    fn second_release_is_a_no_op() {
        let mut state = ReleaseState::default();
        assert!(state.acquire());
        // The second call must not free again and must leave state intact.
        assert!(!state.acquire());
        assert!(state.is_released());
        assert!(!state.acquire());
        assert!(state.is_released());
    }

    #[test]
    fn vertex_bytes_are_six_packed_floats() {
        let v = Vertex {
            position: [1.0, 2.0, 3.0],
            color: [0.5, 0.25, 0.125],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.25, 0.125]);
    }
}
