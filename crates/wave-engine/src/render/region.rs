use crate::coords::Viewport;

/// Color blending for the line-strip pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BlendMode {
    /// Fragments overwrite the target.
    #[default]
    Replace,
    /// `src * src_alpha + dst`, for drawing over an existing scene.
    Additive,
}

impl BlendMode {
    pub(crate) fn state(self) -> Option<wgpu::BlendState> {
        match self {
            BlendMode::Replace => None,
            BlendMode::Additive => Some(wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            }),
        }
    }
}

/// Fraction of the render target used for drawing, anchored bottom-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportRegion {
    pub width_scale: f32,
    pub height_scale: f32,
}

impl ViewportRegion {
    pub const FULL: Self = Self { width_scale: 1.0, height_scale: 1.0 };

    /// Bottom-left quarter (standalone window).
    pub const QUARTER: Self = Self { width_scale: 0.5, height_scale: 0.5 };

    /// Bottom half (embedded item).
    pub const LOWER_HALF: Self = Self { width_scale: 1.0, height_scale: 0.5 };

    /// Resolves the region against `viewport` as `(x, y, w, h)` in physical
    /// pixels with a top-left origin, as expected by `set_viewport`.
    ///
    /// Returns `None` when the region has no area.
    pub fn resolve(self, viewport: Viewport) -> Option<(f32, f32, f32, f32)> {
        if !viewport.is_valid() {
            return None;
        }

        let w = (viewport.width * self.width_scale.clamp(0.0, 1.0)).floor();
        let h = (viewport.height * self.height_scale.clamp(0.0, 1.0)).floor();
        if w < 1.0 || h < 1.0 {
            return None;
        }

        Some((0.0, viewport.height - h, w, h))
    }
}

impl Default for ViewportRegion {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_sits_bottom_left() {
        let r = ViewportRegion::QUARTER.resolve(Viewport::new(640.0, 480.0));
        assert_eq!(r, Some((0.0, 240.0, 320.0, 240.0)));
    }

    #[test]
    fn lower_half_spans_width() {
        let r = ViewportRegion::LOWER_HALF.resolve(Viewport::new(1280.0, 961.0));
        assert_eq!(r, Some((0.0, 481.0, 1280.0, 480.0)));
    }

    #[test]
    fn empty_viewport_has_no_region() {
        assert_eq!(ViewportRegion::FULL.resolve(Viewport::new(0.0, 480.0)), None);
        assert_eq!(ViewportRegion::QUARTER.resolve(Viewport::new(1.0, 1.0)), None);
    }

    #[test]
    fn replace_does_not_blend() {
        assert!(BlendMode::Replace.state().is_none());
        let additive = BlendMode::Additive.state().map(|s| s.color.dst_factor);
        assert_eq!(additive, Some(wgpu::BlendFactor::One));
    }
}
