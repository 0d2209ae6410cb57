//! Game state and core simulation types
//!
//! One owned `GameState` holds everything a round needs. It is passed by
//! reference into `tick` and the renderer, never stored globally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::ground_y;
use crate::tuning::Tuning;
use crate::ui::Button;

/// Which menu screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuScreen {
    /// Initial title screen
    Title,
    /// Lives ran out
    GameOver,
    /// Countdown expired with lives left
    Victory,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Showing a message and the start button, waiting for a click
    Menu(MenuScreen),
    /// Active gameplay
    Playing,
}

impl GamePhase {
    /// Menu phases share the start button and the message layout
    pub fn is_menu(&self) -> bool {
        matches!(self, GamePhase::Menu(_))
    }
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    /// Set by a jump, cleared on landing
    pub airborne: bool,
    pub lives: u32,
    jump_speed: f32,
    gravity: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground_y(PLAYER_SIZE)),
            size: Vec2::splat(PLAYER_SIZE),
            vel_y: 0.0,
            airborne: false,
            lives: tuning.lives,
            jump_speed: tuning.jump_speed,
            gravity: tuning.gravity,
        }
    }

    /// Top edge when standing on the ground
    pub fn ground_line(&self) -> f32 {
        ground_y(self.size.y)
    }

    #[cfg(test)]
    pub fn is_grounded(&self) -> bool {
        !self.airborne && self.pos.y == self.ground_line()
    }

    /// Start a jump. Ignored while already in the air.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel_y = self.jump_speed;
            self.airborne = true;
        }
    }

    /// Apply gravity, integrate, and land on the ground line
    pub fn update(&mut self) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;

        let ground = self.ground_line();
        if self.pos.y > ground {
            self.pos.y = ground;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// An obstacle scrolling in from the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward distance per tick
    pub speed: f32,
}

impl Obstacle {
    /// Place a new obstacle on the ground at `x`
    pub fn spawn(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, ground_y(OBSTACLE_HEIGHT)),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            speed,
        }
    }

    pub fn update(&mut self) {
        self.pos.x -= self.speed;
    }

    /// Right edge has passed the left screen boundary
    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.size.x
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Obstacles passed this round
    pub score: u32,
    /// Seconds left in the round
    pub timer: u32,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub start_button: Button,
    /// Wall-clock time (seconds) of the last timer decrement
    pub last_second: f64,
}

impl GameState {
    /// Create a game sitting on the title screen
    pub fn new(tuning: Tuning, now: f64) -> Self {
        let start_button = Button::new(
            Aabb::new(
                SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 - 5.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            BUTTON_LABEL,
        );

        Self {
            phase: GamePhase::Menu(MenuScreen::Title),
            score: 0,
            timer: tuning.round_seconds,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            start_button,
            last_second: now,
            tuning,
        }
    }

    /// Fresh player, no obstacles, zero score, full timer, and start playing
    pub fn reset(&mut self, now: f64) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.timer = self.tuning.round_seconds;
        self.last_second = now;
        self.phase = GamePhase::Playing;
    }

    /// Spawn one obstacle at the right edge if the gap rule allows it.
    /// Returns true if an obstacle was added.
    pub fn maybe_spawn(&mut self) -> bool {
        let clear = match self.obstacles.last() {
            None => true,
            Some(newest) => newest.pos.x < self.tuning.spawn_threshold(),
        };
        if clear {
            self.obstacles
                .push(Obstacle::spawn(SCREEN_WIDTH, self.tuning.obstacle_speed));
        }
        clear
    }
}
