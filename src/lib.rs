//! Dino Jump - A single-screen side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Draw list generation and macroquad backend
//! - `platform`: Input polling and frame timing
//! - `ui`: Menu widgets
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::App;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Chrome Dinosaur";

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Gap between the bottom of the screen and the ground line
    pub const GROUND_MARGIN: f32 = 50.0;

    /// Fixed simulation timestep (60 Hz, physics constants are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_LIVES: u32 = 3;
    /// Upward impulse applied on jump (negative is up)
    pub const JUMP_SPEED: f32 = -15.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    /// Leftward speed per tick
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// The newest obstacle must be this far in from the right edge before the next spawns
    pub const SPAWN_GAP: f32 = 300.0;

    /// Round length in seconds
    pub const ROUND_SECONDS: u32 = 60;

    /// Start button geometry (centered horizontally, just below mid-screen)
    pub const BUTTON_WIDTH: f32 = 100.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
    pub const BUTTON_LABEL: &str = "Start";
}

/// Top edge of an entity of the given height resting on the ground
#[inline]
pub fn ground_y(height: f32) -> f32 {
    consts::SCREEN_HEIGHT - height - consts::GROUND_MARGIN
}
