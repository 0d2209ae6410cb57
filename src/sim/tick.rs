//! Fixed timestep simulation tick
//!
//! Advances the game state by exactly one tick. Physics values are per tick;
//! only the countdown reads the wall clock, so round length does not depend on
//! frame rate.

use glam::Vec2;

use super::state::{GamePhase, GameState, MenuScreen};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Jump key pressed
    pub jump: bool,
    /// Left click position in logical units
    pub click: Option<Vec2>,
}

impl TickInput {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        !self.jump && self.click.is_none()
    }
}

/// Advance the game state by one tick. `now` is wall-clock seconds.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    // Every menu screen shares the start button
    if state.phase.is_menu() {
        if let Some(point) = input.click {
            if state.start_button.is_clicked(point) {
                log::info!("Round started from {:?}", state.phase);
                state.reset(now);
            }
        }
        return;
    }

    if input.jump {
        state.player.jump();
    }
    step_playing(state, now);
}

fn step_playing(state: &mut GameState, now: f64) {
    state.player.update();

    // Countdown follows the wall clock, one second at a time
    if now - state.last_second >= 1.0 {
        state.timer = state.timer.saturating_sub(1);
        state.last_second = now;
    }

    if state.maybe_spawn() {
        log::debug!("Spawned obstacle #{}", state.obstacles.len());
    }

    // Spawn order. An obstacle that leaves the screen this tick is scored and
    // never tested for collision.
    let player_box = state.player.bounding_box();
    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        obstacle.update();

        if obstacle.is_off_screen() {
            state.obstacles.remove(i);
            state.score += 1;
            log::debug!("Obstacle passed, score {}", state.score);
            continue;
        }

        if player_box.overlaps(&obstacle.bounding_box()) {
            state.obstacles.remove(i);
            state.player.lives = state.player.lives.saturating_sub(1);
            log::debug!("Hit obstacle, {} lives left", state.player.lives);

            if state.player.lives == 0 {
                log::info!("Game over with score {}", state.score);
                state.phase = GamePhase::Menu(MenuScreen::GameOver);
                return;
            }
            continue;
        }

        i += 1;
    }

    if state.timer == 0 {
        log::info!("Round won with score {}", state.score);
        state.phase = GamePhase::Menu(MenuScreen::Victory);
    }
}
