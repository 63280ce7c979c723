mod app;
mod config;

use anyhow::Result;
use draughts_engine::logging::{init_logging, LoggingConfig};
use draughts_engine::window::Runtime;

use crate::app::BoardViewer;
use crate::config::ViewerConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();
    let scene = draughts_scene::build_scene();
    log::info!(
        "scene ready: {} meshes, {} vertices",
        scene.mesh_count(),
        scene.vertex_count()
    );

    let viewer = BoardViewer::new(scene, config.clear_color);
    Runtime::run(config.runtime, config.gpu, viewer)
}
