//! Rendering module
//!
//! `shapes` builds a backend-independent draw list from the game state;
//! `canvas` submits it through macroquad.

pub mod canvas;
pub mod shapes;

pub use shapes::{DrawCmd, TextAnchor, scene};

use crate::sim::GameState;

/// Draw one frame of the current state. Reads the state, never mutates it.
pub fn render(state: &GameState) {
    canvas::draw(&scene(state));
}
