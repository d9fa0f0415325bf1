use crate::coords::Viewport;
use crate::render::{WaveRenderer, WaveRendererConfig};

use super::{RenderJobs, RenderStage};

type Listener = Box<dyn FnMut(f32)>;

/// Scene item that draws the wave through a lazily created renderer.
///
/// Lifecycle, driven by the host once per frame:
/// 1. [`sync`](Self::sync) creates the renderer on first use and copies the
///    item's state into it.
/// 2. The host initializes and paints through [`renderer_mut`](Self::renderer_mut).
/// 3. [`cleanup`](Self::cleanup) drops the renderer when the scene goes away;
///    [`release_resources`](Self::release_resources) defers the drop to the
///    next synchronization stage instead.
///
/// The item is the only owner of its renderer.
pub struct WaveItem {
    config: WaveRendererConfig,
    t: f32,
    renderer: Option<WaveRenderer>,

    on_t_changed: Option<Listener>,
    update_requested: bool,
}

impl WaveItem {
    pub fn new(config: WaveRendererConfig) -> Self {
        Self {
            config,
            t: 0.0,
            renderer: None,
            on_t_changed: None,
            update_requested: false,
        }
    }

    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    /// Sets `t`, notifying the listener and requesting a redraw on change.
    ///
    /// Returns `false` when `t` already had this value.
    pub fn set_t(&mut self, t: f32) -> bool {
        if t == self.t {
            return false;
        }

        self.t = t;
        if let Some(listener) = self.on_t_changed.as_mut() {
            listener(t);
        }
        self.update_requested = true;
        true
    }

    /// Registers the `t` change listener, replacing any previous one.
    pub fn on_t_changed<F>(&mut self, listener: F)
    where
        F: FnMut(f32) + 'static,
    {
        self.on_t_changed = Some(Box::new(listener));
    }

    /// Returns and clears the pending redraw request.
    pub fn take_update_request(&mut self) -> bool {
        std::mem::take(&mut self.update_requested)
    }

    /// Copies item state to the renderer, creating it on first call.
    ///
    /// `viewport` is the window size in physical pixels.
    pub fn sync(&mut self, viewport: Viewport) {
        let config = self.config;
        let renderer = self.renderer.get_or_insert_with(|| {
            log::debug!("WaveItem: creating renderer");
            WaveRenderer::new(config)
        });

        renderer.set_viewport_size(viewport);
        renderer.set_t(self.t);
    }

    #[inline]
    pub fn renderer(&self) -> Option<&WaveRenderer> {
        self.renderer.as_ref()
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> Option<&mut WaveRenderer> {
        self.renderer.as_mut()
    }

    /// Drops the renderer immediately (scene invalidated).
    pub fn cleanup(&mut self) {
        if self.renderer.take().is_some() {
            log::debug!("WaveItem: renderer dropped on cleanup");
        }
    }

    /// Hands the renderer to a job that drops it before the next sync.
    pub fn release_resources(&mut self, jobs: &mut RenderJobs) {
        let Some(renderer) = self.renderer.take() else { return };

        jobs.schedule(RenderStage::BeforeSynchronizing, move || {
            log::debug!("WaveItem: releasing renderer");
            drop(renderer);
        });
    }
}

impl Default for WaveItem {
    fn default() -> Self {
        Self::new(WaveRendererConfig::item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);

    #[test]
    fn renderer_is_created_on_first_sync() {
        let mut item = WaveItem::default();
        assert!(item.renderer().is_none());

        item.sync(VIEWPORT);
        assert!(item.renderer().is_some());
    }

    #[test]
    fn later_syncs_keep_the_same_renderer() {
        let mut item = WaveItem::default();
        item.sync(VIEWPORT);
        let before = item.renderer().map(|r| r as *const WaveRenderer);

        item.set_t(0.5);
        item.sync(Viewport::new(1280.0, 960.0));
        let after = item.renderer().map(|r| r as *const WaveRenderer);

        assert_eq!(before, after);
        let r = item.renderer().expect("renderer");
        assert_eq!(r.t(), 0.5);
        assert_eq!(r.viewport_size(), Some(Viewport::new(1280.0, 960.0)));
    }

    #[test]
    fn set_t_ignores_equal_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut item = WaveItem::default();
        let s = Rc::clone(&seen);
        item.on_t_changed(move |t| s.borrow_mut().push(t));

        assert!(!item.set_t(0.0));
        assert!(!item.take_update_request());

        assert!(item.set_t(0.75));
        assert!(!item.set_t(0.75));
        assert_eq!(*seen.borrow(), vec![0.75]);

        assert!(item.take_update_request());
        assert!(!item.take_update_request());
    }

    #[test]
    fn cleanup_drops_renderer() {
        let mut item = WaveItem::default();
        item.sync(VIEWPORT);
        let alive = Rc::downgrade(&item.renderer().expect("renderer").liveness);
        item.cleanup();
        assert!(item.renderer().is_none());
        assert!(alive.upgrade().is_none());

        // A later sync starts over.
        item.sync(VIEWPORT);
        assert!(item.renderer().is_some());
    }

    #[test]
    fn release_defers_drop_to_next_sync_stage() {
        let mut item = WaveItem::default();
        let mut jobs = RenderJobs::new();
        item.sync(VIEWPORT);
        let alive = Rc::downgrade(&item.renderer().expect("renderer").liveness);

        item.release_resources(&mut jobs);
        assert!(item.renderer().is_none());
        assert_eq!(jobs.len(), 1);

        assert_eq!(jobs.run(RenderStage::BeforeRendering), 0);
        assert!(alive.upgrade().is_some(), "renderer dropped before its stage");

        assert_eq!(jobs.run(RenderStage::BeforeSynchronizing), 1);
        assert!(jobs.is_empty());
        assert!(alive.upgrade().is_none(), "renderer outlived its release job");
    }

    #[test]
    fn release_without_renderer_schedules_nothing() {
        let mut item = WaveItem::default();
        let mut jobs = RenderJobs::new();
        item.release_resources(&mut jobs);
        assert!(jobs.is_empty());
    }
}
