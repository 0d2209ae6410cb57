//! Draw list generation
//!
//! Turns a `GameState` into an ordered list of primitives. Nothing here talks
//! to the graphics backend, so the scene layout is testable headless.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Aabb, GamePhase, GameState, MenuScreen};
use crate::ui::Button;
use crate::ui::button::BUTTON_OUTLINE;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Font size for HUD, messages and button labels
pub const FONT_SIZE: f32 = 36.0;
/// Vertical distance between message lines
pub const LINE_SPACING: f32 = 40.0;

/// How a text position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the top-left corner of the text box
    TopLeft,
    /// Position is the center of the text box
    Center,
}

/// A single drawing primitive in logical units
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear([f32; 4]),
    FillRect {
        rect: Aabb,
        color: [f32; 4],
    },
    OutlineRect {
        rect: Aabb,
        thickness: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: TextAnchor,
        size: f32,
        color: [f32; 4],
    },
}

/// Build the full frame for the current state
pub fn scene(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear(WHITE)];

    match state.phase {
        GamePhase::Playing => playfield(state, &mut cmds),
        GamePhase::Menu(screen) => {
            let lines = menu_message(screen, state.score);
            for (i, line) in lines.into_iter().enumerate() {
                cmds.push(DrawCmd::Text {
                    text: line,
                    pos: Vec2::new(
                        SCREEN_WIDTH / 2.0,
                        (SCREEN_HEIGHT / 3.0).floor() + i as f32 * LINE_SPACING,
                    ),
                    anchor: TextAnchor::Center,
                    size: FONT_SIZE,
                    color: BLACK,
                });
            }
            button(&state.start_button, &mut cmds);
        }
    }

    cmds
}

/// Message lines shown above the start button
pub fn menu_message(screen: MenuScreen, score: u32) -> Vec<String> {
    match screen {
        MenuScreen::Title => vec![crate::consts::WINDOW_TITLE.to_string()],
        MenuScreen::GameOver => vec![
            "You lost!".to_string(),
            "Press 'Start' to continue".to_string(),
        ],
        MenuScreen::Victory => vec![format!("You won! Score: {}", score)],
    }
}

fn playfield(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    cmds.push(DrawCmd::FillRect {
        rect: state.player.bounding_box(),
        color: BLACK,
    });
    for obstacle in &state.obstacles {
        cmds.push(DrawCmd::FillRect {
            rect: obstacle.bounding_box(),
            color: RED,
        });
    }

    let hud = [
        format!("Score: {}", state.score),
        format!("Lives: {}", state.player.lives),
        format!("Time: {}", state.timer),
    ];
    for (i, text) in hud.into_iter().enumerate() {
        cmds.push(DrawCmd::Text {
            text,
            pos: Vec2::new(10.0, 10.0 + i as f32 * LINE_SPACING),
            anchor: TextAnchor::TopLeft,
            size: FONT_SIZE,
            color: BLACK,
        });
    }
}

/// Outline plus centered label
fn button(button: &Button, cmds: &mut Vec<DrawCmd>) {
    cmds.push(DrawCmd::OutlineRect {
        rect: button.rect,
        thickness: BUTTON_OUTLINE,
        color: BLACK,
    });
    cmds.push(DrawCmd::Text {
        text: button.label.clone(),
        pos: button.rect.center(),
        anchor: TextAnchor::Center,
        size: FONT_SIZE,
        color: BLACK,
    });
}
