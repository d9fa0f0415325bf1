//! Standalone window drawing the animated pipe and torch.

use anyhow::Result;

use wave_engine::core::{App, AppControl, FrameCtx};
use wave_engine::device::GpuInit;
use wave_engine::logging::{init_logging, LoggingConfig};
use wave_engine::paint::Color;
use wave_engine::render::{WaveRenderer, WaveRendererConfig};
use wave_engine::window::{Runtime, RuntimeConfig};

const SAMPLES: u32 = 16;

struct WaveWindow {
    renderer: WaveRenderer,
}

impl App for WaveWindow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| {
            renderer.init(rctx);
            renderer.paint(rctx, target);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = WaveWindow {
        renderer: WaveRenderer::new(WaveRendererConfig::window()),
    };

    Runtime::run(
        RuntimeConfig::new("WaveWindow", 640.0, 480.0),
        GpuInit::default().with_sample_count(SAMPLES),
        app,
    )
}
