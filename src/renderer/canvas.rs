//! macroquad backend for the draw list
//!
//! Logical units map 1:1 to window pixels; the window is created at the
//! logical resolution and is not resizable.

use macroquad::prelude::{
    Color, clear_background, draw_rectangle, draw_rectangle_lines, draw_text, measure_text,
};

use super::shapes::{DrawCmd, TextAnchor};

fn color(c: [f32; 4]) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Submit every command in order
pub fn draw(cmds: &[DrawCmd]) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear(c) => clear_background(color(*c)),
            DrawCmd::FillRect { rect, color: c } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, color(*c));
            }
            DrawCmd::OutlineRect {
                rect,
                thickness,
                color: c,
            } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, *thickness, color(*c));
            }
            DrawCmd::Text {
                text,
                pos,
                anchor,
                size,
                color: c,
            } => {
                let dims = measure_text(text, None, *size as u16, 1.0);
                // draw_text takes the baseline, not the top edge
                let (x, y) = match anchor {
                    TextAnchor::TopLeft => (pos.x, pos.y + dims.offset_y),
                    TextAnchor::Center => (
                        pos.x - dims.width * 0.5,
                        pos.y - dims.height * 0.5 + dims.offset_y,
                    ),
                };
                draw_text(text, x.round(), y.round(), *size, color(*c));
            }
        }
    }
}
