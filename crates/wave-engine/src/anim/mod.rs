//! Frame animation.
//!
//! Drives the horizontal oscillation of the torch shape. The animation is a
//! pure function of [`FrameState`]; renderers own their state and call
//! [`advance`] once per rendered frame. [`PingPong`] drives time-based item
//! properties.

mod ping_pong;
mod state;

pub use ping_pong::PingPong;
pub use state::{advance, Direction, FrameAnimator, FrameState, AMPLITUDE, PERIOD, STEP};
