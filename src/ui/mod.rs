//! Menu widgets
//!
//! Widgets are plain data with hit-testing. Drawing goes through the
//! renderer's draw list like everything else.

pub mod button;

pub use button::Button;
