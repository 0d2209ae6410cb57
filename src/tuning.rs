//! Game balance values
//!
//! Every per-tick physics number and round rule lives here so the simulation
//! can be driven with alternate values in tests.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Upward velocity set by a jump (negative is up)
    pub jump_speed: f32,
    /// Velocity added every tick
    pub gravity: f32,
    /// Lives at the start of a round
    pub lives: u32,

    // === Obstacles ===
    /// Leftward distance travelled per tick
    pub obstacle_speed: f32,
    /// Minimum distance the newest obstacle must travel before another spawns
    pub spawn_gap: f32,

    // === Round ===
    /// Countdown length in seconds
    pub round_seconds: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            lives: PLAYER_LIVES,

            obstacle_speed: OBSTACLE_SPEED,
            spawn_gap: SPAWN_GAP,

            round_seconds: ROUND_SECONDS,
        }
    }
}

impl Tuning {
    /// X coordinate the newest obstacle must pass before the next one spawns
    pub fn spawn_threshold(&self) -> f32 {
        SCREEN_WIDTH - self.spawn_gap
    }

    /// Ticks an obstacle needs to cross the screen and leave on the left
    #[cfg(test)]
    pub fn crossing_ticks(&self) -> u32 {
        ((SCREEN_WIDTH + OBSTACLE_WIDTH) / self.obstacle_speed).floor() as u32 + 1
    }
}
