//! Per-frame draw sequencing.
//!
//! Responsibilities:
//! - build the pipe and torch transforms for one frame
//! - advance the animation state between the two draws
//! - hand the renderer an ordered, renderer-agnostic draw stream

mod cmd;
mod config;
mod sequencer;

pub use cmd::{DrawCmd, DrawList, Primitive};
pub use config::SequencerConfig;
pub use sequencer::DrawSequencer;
