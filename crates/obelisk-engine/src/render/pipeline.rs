use std::borrow::Cow;

use crate::render::{Mesh, RenderTarget};
use crate::shader::{ShaderError, ShaderSet};

use super::mesh::Vertex;

/// Byte size of the transform uniform block: three std140 mat4s.
const TRANSFORM_UBO_SIZE: wgpu::BufferAddress = 3 * 64;

/// Name → byte offset table for the transform uniform block.
///
/// This is the program's "reflection": uploads address slots by name, and a
/// name missing here makes the upload a no-op rather than an error, so shader
/// source and client code tolerate drift without crashing the frame loop.
const TRANSFORM_SLOTS: [(&str, wgpu::BufferAddress); 3] =
    [("model", 0), ("view", 64), ("proj", 128)];

fn uniform_offset(name: &str) -> Option<wgpu::BufferAddress> {
    TRANSFORM_SLOTS
        .iter()
        .find(|(slot, _)| *slot == name)
        .map(|(_, offset)| *offset)
}

/// Pipeline for drawing non-indexed colored triangle meshes.
///
/// Links a compiled [`ShaderSet`] into a render pipeline and owns the
/// transform uniform buffer the vertex stage reads. Back faces are culled;
/// mesh data must be wound counter-clockwise as seen from outside.
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    transform_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    warned_unknown_uniform: bool,
}

impl MeshRenderer {
    /// Builds the pipeline from compiled shader stages.
    ///
    /// Module and pipeline creation run inside a validation error scope;
    /// stage-interface mismatches and other link-time problems surface as
    /// [`ShaderError::Link`] instead of a device panic.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shaders: &ShaderSet,
    ) -> Result<Self, ShaderError> {
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("obelisk mesh vs"),
            source: wgpu::ShaderSource::SpirV(Cow::Borrowed(shaders.vertex_spirv())),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("obelisk mesh fs"),
            source: wgpu::ShaderSource::SpirV(Cow::Borrowed(shaders.fragment_spirv())),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("obelisk transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(TRANSFORM_UBO_SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("obelisk mesh pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("obelisk mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let transform_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("obelisk transform ubo"),
            size: TRANSFORM_UBO_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("obelisk transform bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(ShaderError::Link {
                log: err.to_string(),
            });
        }

        Ok(Self {
            pipeline,
            transform_ubo,
            bind_group,
            warned_unknown_uniform: false,
        })
    }

    /// Uploads a column-major 4x4 matrix to the named uniform slot.
    ///
    /// An unknown name is ignored (one-time debug message); slots for other
    /// names are never disturbed by the miss.
    pub fn set_mat4(&mut self, queue: &wgpu::Queue, name: &str, matrix: glam::Mat4) {
        match uniform_offset(name) {
            Some(offset) => {
                queue.write_buffer(
                    &self.transform_ubo,
                    offset,
                    bytemuck::cast_slice(&matrix.to_cols_array()),
                );
            }
            None => {
                if !self.warned_unknown_uniform {
                    log::debug!("unknown uniform name {name:?}; upload ignored");
                    self.warned_unknown_uniform = true;
                }
            }
        }
    }

    /// Records a draw of the whole mesh as independent triangles.
    ///
    /// The pass loads the existing color contents; clearing belongs to the
    /// frame driver.
    pub fn draw(&self, target: &mut RenderTarget<'_>, mesh: &Mesh) {
        debug_assert!(!mesh.is_released());

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("obelisk mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.buffer().slice(..));
        rpass.draw(0..mesh.vertex_count(), 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_resolve_all_three_transforms() {
        assert_eq!(uniform_offset("model"), Some(0));
        assert_eq!(uniform_offset("view"), Some(64));
        assert_eq!(uniform_offset("proj"), Some(128));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(uniform_offset("modl"), None);
        assert_eq!(uniform_offset(""), None);
        assert_eq!(uniform_offset("projection"), None);
    }

    #[test]
    fn slots_fit_the_uniform_block() {
        for (_, offset) in TRANSFORM_SLOTS {
            assert_eq!(offset % 64, 0);
            assert!(offset + 64 <= TRANSFORM_UBO_SIZE);
        }
    }
}
