//! GPU rendering subsystem.
//!
//! Renderers consume `sequence` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - geometry is in model space and reaches clip space through each command's
//!   transform uniform
//! - viewport sizes are in physical pixels

mod ctx;
mod line_strip;
mod region;
mod wave;

pub use ctx::{RenderCtx, RenderTarget};
pub use line_strip::LineStripRenderer;
pub use region::{BlendMode, ViewportRegion};
pub use wave::{WaveRenderer, WaveRendererConfig};
