use obelisk_engine::core::{App, AppControl, FrameCtx};
use obelisk_engine::device::Gpu;
use obelisk_engine::render::{Mesh, MeshRenderer};
use obelisk_engine::shader::ShaderSet;
use obelisk_engine::transform::{Matrices, next_rotation};

use crate::geometry::PYRAMID_VERTICES;
use crate::shaders::{PYRAMID_FRAG, PYRAMID_VERT};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.07,
    g: 0.13,
    b: 0.17,
    a: 1.0,
};

/// GPU-side scene state, built once in `on_ready`.
struct Scene {
    mesh: Mesh,
    renderer: MeshRenderer,
}

/// The rotating-pyramid application.
pub struct PyramidApp {
    rotation_degrees: f32,
    scene: Option<Scene>,
}

impl PyramidApp {
    pub fn new() -> Self {
        Self {
            rotation_degrees: 0.0,
            scene: None,
        }
    }
}

impl Default for PyramidApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for PyramidApp {
    fn on_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        // Compile, link, upload. Any failure here is fatal; there is no
        // fallback shader and no degraded mode.
        let shaders = ShaderSet::compile(PYRAMID_VERT, PYRAMID_FRAG)?;
        let renderer = MeshRenderer::new(gpu.device(), gpu.surface_format(), &shaders)?;
        let mesh = Mesh::create(gpu.device(), "pyramid vertices", &PYRAMID_VERTICES)?;

        log::info!("scene ready: {} vertices", mesh.vertex_count());

        self.scene = Some(Scene { mesh, renderer });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.rotation_degrees = next_rotation(self.rotation_degrees, ctx.time.dt);
        let rotation = self.rotation_degrees;

        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        ctx.render(CLEAR_COLOR, |rctx, target| {
            let matrices = Matrices::compute(rotation, rctx.aspect);

            scene.renderer.set_mat4(rctx.queue, "model", matrices.model);
            scene.renderer.set_mat4(rctx.queue, "view", matrices.view);
            scene.renderer.set_mat4(rctx.queue, "proj", matrices.proj);

            scene.renderer.draw(target, &scene.mesh);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_unrotated_with_no_scene() {
        let app = PyramidApp::default();
        assert_eq!(app.rotation_degrees, 0.0);
        assert!(app.scene.is_none());
    }
}
