//! Clickable rectangle with a centered label

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Aabb;

/// Outline thickness in logical units
pub const BUTTON_OUTLINE: f32 = 2.0;

/// A labelled button. Holds no hover or pressed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub rect: Aabb,
    pub label: String,
}

impl Button {
    pub fn new(rect: Aabb, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    /// True iff `point` lies inside the button rectangle
    pub fn is_clicked(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_clicked() {
        let button = Button::new(Aabb::new(350.0, 195.0, 100.0, 50.0), "Start");
        assert!(button.is_clicked(Vec2::new(400.0, 220.0)));
        assert!(button.is_clicked(Vec2::new(350.0, 195.0)));
        assert!(!button.is_clicked(Vec2::new(349.0, 220.0)));
        assert!(!button.is_clicked(Vec2::new(400.0, 245.0)));
        assert!(!button.is_clicked(Vec2::new(10.0, 10.0)));
    }
}
