//! Input translation
//!
//! Raw window events are read from macroquad once per frame and translated
//! into game commands. Anything that does not map to a command is dropped.

use glam::Vec2;
use macroquad::input::{
    KeyCode, MouseButton, get_keys_pressed, is_mouse_button_pressed, is_quit_requested,
    mouse_position,
};

/// Key bound to jump
pub const JUMP_KEY: KeyCode = KeyCode::Space;

/// An input event as reported by the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    CloseRequested,
    MouseDown { button: MouseButton, pos: Vec2 },
    KeyDown(KeyCode),
}

/// What the game should do in response to input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    /// Left click at a logical position
    Click(Vec2),
    Jump,
}

/// Map one raw event to a command, if it has one
pub fn translate(event: RawEvent) -> Option<Command> {
    match event {
        RawEvent::CloseRequested => Some(Command::Quit),
        RawEvent::MouseDown {
            button: MouseButton::Left,
            pos,
        } => Some(Command::Click(pos)),
        RawEvent::KeyDown(key) if key == JUMP_KEY => Some(Command::Jump),
        _ => None,
    }
}

/// Read this frame's events from macroquad.
///
/// Requires `prevent_quit()` to have been called so the close button reports
/// through `is_quit_requested` instead of exiting immediately.
pub fn poll_events() -> Vec<RawEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(RawEvent::CloseRequested);
    }

    let (x, y) = mouse_position();
    for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        if is_mouse_button_pressed(button) {
            events.push(RawEvent::MouseDown {
                button,
                pos: Vec2::new(x, y),
            });
        }
    }

    for key in get_keys_pressed() {
        events.push(RawEvent::KeyDown(key));
    }

    events
}

/// Poll and translate in one go
pub fn poll_commands() -> Vec<Command> {
    poll_events().into_iter().filter_map(translate).collect()
}
