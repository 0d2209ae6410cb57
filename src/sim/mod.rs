//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Per-tick physics only
//! - Wall-clock time passed in, never read
//! - Stable iteration order (spawn order)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{GamePhase, GameState, MenuScreen, Obstacle, Player};
pub use tick::{TickInput, tick};
