//! Wave engine crate.
//!
//! Animated line-strip rendering on wgpu: the frame animator and draw
//! sequencer, the GPU renderer that consumes them, an embeddable scene item,
//! and the platform runtime that drives them.

pub mod anim;
pub mod geometry;
pub mod sequence;

pub mod coords;
pub mod core;
pub mod device;
pub mod item;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
