use draughts_engine::core::{App, AppControl, FrameCtx};
use draughts_engine::geometry::Rgb;
use draughts_engine::render::StaticMeshRenderer;
use draughts_scene::Scene;

/// Draws a pre-built scene.
///
/// The scene is uploaded on the first frame and then dropped; later frames
/// (expose, resize) redraw from the GPU buffers.
pub struct BoardViewer {
    scene: Option<Scene>,
    renderer: StaticMeshRenderer,
    clear_color: Rgb,
}

impl BoardViewer {
    pub fn new(scene: Scene, clear_color: Rgb) -> Self {
        Self {
            scene: Some(scene),
            renderer: StaticMeshRenderer::new(),
            clear_color,
        }
    }
}

impl App for BoardViewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(scene) = self.scene.take() {
            let rctx = ctx.render_ctx();
            self.renderer.upload(&rctx, scene.meshes());
        }

        let renderer = &mut self.renderer;
        ctx.render(self.clear_color, |rctx, target| {
            renderer.render(rctx, target);
        })
    }
}
