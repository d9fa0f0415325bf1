use crate::anim::FrameState;
use crate::coords::Viewport;
use crate::render::{BlendMode, LineStripRenderer, RenderCtx, RenderTarget, ViewportRegion};
use crate::sequence::{DrawList, DrawSequencer, SequencerConfig};

/// Per-variant settings for [`WaveRenderer`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WaveRendererConfig {
    pub sequencer: SequencerConfig,
    pub region: ViewportRegion,
    pub blend: BlendMode,
}

impl WaveRendererConfig {
    /// Standalone window: 4:3 projections, bottom-left quarter, no blending.
    pub const fn window() -> Self {
        Self {
            sequencer: SequencerConfig::window(),
            region: ViewportRegion::QUARTER,
            blend: BlendMode::Replace,
        }
    }

    /// Embedded item: mixed projections, bottom half, additive over the scene.
    pub const fn item() -> Self {
        Self {
            sequencer: SequencerConfig::item(),
            region: ViewportRegion::LOWER_HALF,
            blend: BlendMode::Additive,
        }
    }
}

/// Draws the animated pipe and torch.
///
/// Construction does not touch the GPU; resources are created by
/// [`init`](Self::init) on the render side.
pub struct WaveRenderer {
    config: WaveRendererConfig,
    sequencer: DrawSequencer,
    state: FrameState,
    lines: LineStripRenderer,
    draw_list: DrawList,

    viewport_size: Option<Viewport>,
    t: f32,

    /// Lets tests observe when the renderer is dropped.
    #[cfg(test)]
    pub(crate) liveness: std::rc::Rc<()>,
}

impl WaveRenderer {
    pub fn new(config: WaveRendererConfig) -> Self {
        Self {
            config,
            sequencer: DrawSequencer::new(config.sequencer),
            state: FrameState::new(),
            lines: LineStripRenderer::new(),
            draw_list: DrawList::new(),
            viewport_size: None,
            t: 0.0,
            #[cfg(test)]
            liveness: std::rc::Rc::new(()),
        }
    }

    #[inline]
    pub fn config(&self) -> WaveRendererConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.lines.is_initialized()
    }

    /// Overrides the viewport used by [`paint`](Self::paint) (physical px).
    pub fn set_viewport_size(&mut self, size: Viewport) {
        self.viewport_size = Some(size);
    }

    #[inline]
    pub fn viewport_size(&self) -> Option<Viewport> {
        self.viewport_size
    }

    pub fn set_t(&mut self, t: f32) {
        self.t = t;
    }

    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    /// Creates GPU resources for the current target. Repeated calls are cheap.
    pub fn init(&mut self, ctx: &RenderCtx<'_>) {
        if !self.lines.is_initialized() {
            log::debug!("WaveRenderer: initializing ({:?})", self.config.blend);
        }
        self.lines.prepare(ctx, self.config.blend);
    }

    /// Records one frame and advances the animation.
    pub fn paint(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let next = self.sequencer.record(self.state, &mut self.draw_list);

        let ctx = RenderCtx::new(
            ctx.device,
            ctx.queue,
            ctx.surface_format,
            ctx.sample_count,
            fit_viewport(self.viewport_size, ctx.viewport),
        );

        self.lines.render(
            &ctx,
            target,
            &self.draw_list,
            self.config.region,
            self.config.blend,
        );

        self.state = next;
    }
}

/// Returns the synced size clamped to the render target.
///
/// The window size can run ahead of the surface size until the resize is
/// delivered; the viewport must never exceed the target.
fn fit_viewport(synced: Option<Viewport>, target: Viewport) -> Viewport {
    match synced {
        Some(v) => Viewport::new(v.width.min(target.width), v.height.min(target.height)),
        None => target,
    }
}
