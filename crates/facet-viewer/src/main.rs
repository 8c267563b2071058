//! Facet viewer: opens one window and draws one static vertex-colored square.

use anyhow::Result;
use winit::dpi::LogicalSize;

use facet_engine::core::{App, AppControl, FrameCtx};
use facet_engine::device::{Gpu, GpuInit};
use facet_engine::logging::{init_logging, LoggingConfig};
use facet_engine::paint::Color;
use facet_engine::render::SquareRenderer;
use facet_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::BLACK;

/// The viewer app: builds the square renderer once the surface exists and
/// clears + draws every frame.
#[derive(Default)]
struct SquareApp {
    renderer: Option<SquareRenderer>,
}

impl App for SquareApp {
    fn on_surface_ready(&mut self, gpu: &Gpu<'_>) {
        // Shader/pipeline validation failure is fatal, with the driver's
        // diagnostic in the panic message. No retry, no fallback.
        let renderer = SquareRenderer::new(gpu.device(), gpu.surface_format())
            .expect("square renderer initialization failed");

        log::info!(
            "square renderer ready (surface format {:?})",
            gpu.surface_format()
        );
        self.renderer = Some(renderer);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(CLEAR_COLOR, |rctx, target| renderer.render(rctx, target))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "facet".to_string(),
        initial_size: LogicalSize::new(640.0, 640.0),
    };

    let gpu_init = GpuInit {
        present_mode: wgpu::PresentMode::Fifo,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, SquareApp::default())
}
