use draughts_engine::device::GpuInit;
use draughts_engine::geometry::Rgb;
use draughts_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Everything the viewer needs to open its window and draw.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    /// Clear color. The board covers the whole surface, so this only shows
    /// through if nothing else is drawn.
    pub clear_color: Rgb,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "Checkers".to_string(),
                initial_size: LogicalSize::new(600.0, 600.0),
                resizable: true,
            },
            // Tile shades are authored for a linear framebuffer.
            gpu: GpuInit {
                prefer_srgb: false,
                ..GpuInit::default()
            },
            clear_color: Rgb::gray(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.runtime.title, "Checkers");
        assert_eq!(cfg.runtime.initial_size, LogicalSize::new(600.0, 600.0));
        assert!(!cfg.gpu.prefer_srgb);
        assert_eq!(cfg.clear_color, Rgb::new(0.5, 0.5, 0.5));
    }
}
