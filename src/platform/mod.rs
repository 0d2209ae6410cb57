//! Platform abstraction layer
//!
//! Handles the window-facing side of the loop:
//! - Input events
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{Command, RawEvent, poll_commands, translate};
pub use time::FrameClock;
