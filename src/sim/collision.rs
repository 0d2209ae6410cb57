//! Axis-aligned box collision
//!
//! Every rectangle in the game is half-open: `[x, x + w) × [y, y + h)`.
//! Boxes that only share an edge do not overlap, and a point on the right or
//! bottom edge is outside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if a point is inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True iff both the horizontal and vertical projections intersect
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let b = Aabb::new(40.0, 40.0, 30.0, 50.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(25.0, 25.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let right = Aabb::new(50.0, 0.0, 50.0, 50.0);
        let below = Aabb::new(0.0, 50.0, 50.0, 50.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        // Horizontal projections overlap, vertical ones do not
        let player = Aabb::new(100.0, 200.0, 50.0, 50.0);
        let obstacle = Aabb::new(110.0, 300.0, 30.0, 50.0);
        assert!(!player.overlaps(&obstacle));
    }

    #[test]
    fn test_contains_half_open() {
        let rect = Aabb::new(350.0, 195.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(350.0, 195.0)));
        assert!(rect.contains(rect.center()));
        assert!(!rect.contains(Vec2::new(450.0, 200.0)));
        assert!(!rect.contains(Vec2::new(400.0, 245.0)));
        assert!(!rect.contains(Vec2::new(349.9, 200.0)));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_overlap_iff_shared_point(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            // The top-left of the intersection is inside both boxes exactly when they overlap
            let corner = Vec2::new(ax.max(bx), ay.max(by));
            prop_assert_eq!(a.overlaps(&b), a.contains(corner) && b.contains(corner));
        }
    }
}
