//! Embedded scene item.
//!
//! A [`WaveItem`] lives inside a host-driven scene and exclusively owns one
//! [`WaveRenderer`](crate::render::WaveRenderer). The host calls into it at
//! fixed stages of each frame and runs [`RenderJobs`] between them.

mod jobs;
mod wave_item;

pub use jobs::{RenderJobs, RenderStage};
pub use wave_item::WaveItem;
