//! Axis-aligned rectangle geometry for paddles, ball and buttons
//!
//! Coordinates follow screen convention: origin at top-left, y grows downward.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect must have positive size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlap test. Touching edges do not count as a collision.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment (left/top inclusive, right/bottom exclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// The play area. Everything in the simulation is measured against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        // Edge contact only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(9.9, 5.0)));
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!r.contains_point(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_centered() {
        let field = Field::default();
        let r = Rect::centered(field.center(), 20.0, 20.0);
        assert_eq!(r.center(), field.center());
        assert_eq!(r.x, 390.0);
        assert_eq!(r.y, 290.0);
    }
}
