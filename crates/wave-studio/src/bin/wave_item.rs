//! Scene host embedding a `WaveItem`.
//!
//! Each frame walks the item through the host's stages: pending
//! synchronization jobs, sync, pending pre-render jobs, init + paint, and
//! post-render jobs.

use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use wave_engine::anim::PingPong;
use wave_engine::coords::Viewport;
use wave_engine::core::{App, AppControl, FrameCtx};
use wave_engine::device::GpuInit;
use wave_engine::item::{RenderJobs, RenderStage, WaveItem};
use wave_engine::logging::{init_logging, LoggingConfig};
use wave_engine::paint::Color;
use wave_engine::render::WaveRendererConfig;
use wave_engine::window::{Runtime, RuntimeConfig};

/// Seconds per leg of the `t` animation.
const T_LEG_SECS: f32 = 2.5;

struct SceneHost {
    item: WaveItem,
    jobs: RenderJobs,
    t_anim: PingPong,
    occluded: bool,
}

impl SceneHost {
    fn new() -> Self {
        let mut item = WaveItem::new(WaveRendererConfig::item());
        item.on_t_changed(|t| log::trace!("t = {t:.3}"));

        Self {
            item,
            jobs: RenderJobs::new(),
            t_anim: PingPong::new(T_LEG_SECS),
            occluded: false,
        }
    }

    fn set_occluded(&mut self, occluded: bool) {
        if occluded && !self.occluded {
            log::debug!("window occluded; releasing item resources");
            self.item.release_resources(&mut self.jobs);
        }
        self.occluded = occluded;
    }

    /// Runs the synchronization stages. Returns `false` when nothing should be
    /// painted this frame.
    ///
    /// While occluded only pending release jobs run, so a released renderer
    /// stays released until the window is visible again.
    fn synchronize(&mut self, dt: f32, viewport: Viewport) -> bool {
        self.jobs.run(RenderStage::BeforeSynchronizing);
        if self.occluded {
            return false;
        }

        self.item.set_t(self.t_anim.update(dt));
        self.item.sync(viewport);
        self.jobs.run(RenderStage::BeforeRendering);
        true
    }
}

impl App for SceneHost {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        // Hidden windows give their GPU resources back. The renderer is rebuilt
        // once the window is visible again and its animation restarts.
        if let WindowEvent::Occluded(occluded) = *event {
            self.set_occluded(occluded);
        }
        AppControl::Continue
    }

    fn on_window_closed(&mut self, _window_id: WindowId) {
        self.item.cleanup();
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.synchronize(ctx.time.dt, ctx.window.physical_viewport()) {
            return AppControl::Continue;
        }
        if self.item.take_update_request() {
            ctx.window.request_redraw();
        }

        let item = &mut self.item;
        let control = ctx.render(Color::BLACK, |rctx, target| {
            if let Some(renderer) = item.renderer_mut() {
                renderer.init(rctx);
                renderer.paint(rctx, target);
            }
        });

        self.jobs.run(RenderStage::AfterRendering);
        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig::new("WaveItem", 640.0, 480.0),
        GpuInit::default(),
        SceneHost::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);

    #[test]
    fn visible_frames_sync_the_item() {
        let mut host = SceneHost::new();
        assert!(host.synchronize(0.5, VIEWPORT));
        assert!(host.item.renderer().is_some());
        assert!(host.item.t() > 0.0);
    }

    #[test]
    fn occluded_window_keeps_renderer_released() {
        let mut host = SceneHost::new();
        host.synchronize(0.1, VIEWPORT);

        host.set_occluded(true);
        let t = host.item.t();

        assert!(!host.synchronize(0.1, VIEWPORT));
        assert!(!host.synchronize(0.1, VIEWPORT));
        assert!(host.jobs.is_empty());
        assert!(host.item.renderer().is_none());
        assert_eq!(host.item.t(), t);

        host.set_occluded(false);
        assert!(host.synchronize(0.1, VIEWPORT));
        let renderer = host.item.renderer().expect("renderer rebuilt");
        assert_eq!(renderer.state().frame_index, 0);
    }
}
