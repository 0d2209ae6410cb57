//! Game loop driver
//!
//! Owns the game state and frame clock, and turns a frame's worth of
//! commands into simulation ticks. Everything here runs without a window; the
//! binary only supplies commands, the time, and the draw call.

use std::mem;

use crate::platform::{Command, FrameClock};
use crate::sim::{GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct App {
    pub state: GameState,
    clock: FrameClock,
    /// Input waiting for the next tick
    pending: TickInput,
    quit: bool,
}

impl App {
    pub fn new(tuning: Tuning, now: f64) -> Self {
        Self {
            state: GameState::new(tuning, now),
            clock: FrameClock::new(),
            pending: TickInput::default(),
            quit: false,
        }
    }

    /// Queue this frame's commands
    pub fn handle(&mut self, commands: &[Command]) {
        for command in commands {
            match *command {
                Command::Quit => {
                    log::info!("Quit requested");
                    self.quit = true;
                }
                Command::Click(pos) => self.pending.click = Some(pos),
                Command::Jump => self.pending.jump = true,
            }
        }
    }

    /// Run however many ticks the clock allows. Queued input goes to the first
    /// tick; if no tick runs it waits for the next frame.
    pub fn update(&mut self, now: f64) -> u32 {
        let steps = self.clock.begin_frame(now);
        for _ in 0..steps {
            let input = mem::take(&mut self.pending);
            tick(&mut self.state, &input, now);
        }
        steps
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[cfg(test)]
    pub fn has_pending_input(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{GamePhase, MenuScreen};

    const DT: f64 = SIM_DT as f64;

    fn start(app: &mut App, now: f64) {
        let center = app.state.start_button.rect.center();
        app.handle(&[Command::Click(center)]);
        app.update(now);
    }

    #[test]
    fn test_click_starts_round() {
        let mut app = App::new(Tuning::default(), 0.0);
        start(&mut app, 0.0);
        assert_eq!(app.state.phase, GamePhase::Playing);
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.timer, 60);
        assert_eq!(app.state.player.lives, 3);
        assert!(app.state.obstacles.is_empty());
        assert!(!app.has_pending_input());
    }

    #[test]
    fn test_input_waits_for_a_tick() {
        let mut app = App::new(Tuning::default(), 0.0);
        start(&mut app, 0.0);

        app.handle(&[Command::Jump]);
        // Not enough time for a tick yet
        assert_eq!(app.update(DT * 0.5), 0);
        assert!(app.has_pending_input());
        assert!(!app.state.player.airborne);

        assert_eq!(app.update(DT * 1.1), 1);
        assert!(!app.has_pending_input());
        assert!(app.state.player.airborne);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Tuning::default(), 0.0);
        assert!(!app.should_quit());
        app.handle(&[Command::Quit]);
        assert!(app.should_quit());
        assert_eq!(app.state.phase, GamePhase::Menu(MenuScreen::Title));
    }

    #[test]
    fn test_quit_while_playing() {
        let mut app = App::new(Tuning::default(), 0.0);
        start(&mut app, 0.0);
        assert_eq!(app.state.phase, GamePhase::Playing);

        app.handle(&[Command::Jump, Command::Quit]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_on_game_over() {
        let mut app = App::new(Tuning::default(), 0.0);
        start(&mut app, 0.0);
        app.state.player.lives = 1;
        app.state
            .obstacles
            .push(crate::sim::Obstacle::spawn(152.0, crate::consts::OBSTACLE_SPEED));
        app.update(DT * 1.1);
        assert_eq!(app.state.phase, GamePhase::Menu(MenuScreen::GameOver));
        assert!(!app.should_quit());

        app.handle(&[Command::Quit]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_round_runs_out_to_victory() {
        let mut app = App::new(Tuning::default(), 0.0);
        start(&mut app, 0.0);
        // Keep the player clear of every obstacle
        app.state.player.pos.x = -1000.0;

        let mut now = 0.0;
        while app.state.phase == GamePhase::Playing {
            now += DT * 1.001;
            app.update(now);
            assert!(now < 62.0, "round never ended");
        }
        assert_eq!(app.state.phase, GamePhase::Menu(MenuScreen::Victory));
        assert_eq!(app.state.player.lives, 3);
        assert!(app.state.score > 0);
    }
}
