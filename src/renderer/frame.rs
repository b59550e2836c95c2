//! CPU-side frame assembly
//!
//! `FrameBuilder` is the `Canvas` the game draws into. The GPU side only ever
//! sees the finished vertex list.

use glam::Vec2;

use super::font;
use super::shapes::{self, ELLIPSE_SEGMENTS};
use super::vertex::{Color, Vertex, colors};
use crate::platform::Canvas;
use crate::sim::Rect;

/// Screen pixels per font pixel
pub const TEXT_SCALE: f32 = 3.0;

#[derive(Debug, Clone)]
pub struct FrameBuilder {
    pub clear_color: Color,
    vertices: Vec<Vertex>,
    text_scale: f32,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            clear_color: colors::WHITE,
            vertices: Vec::with_capacity(4096),
            text_scale: TEXT_SCALE,
        }
    }

    /// Triangle list in field pixels, in draw order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for FrameBuilder {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        shapes::quad(&rect, color, &mut self.vertices);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        shapes::ellipse(&rect, color, ELLIPSE_SEGMENTS, &mut self.vertices);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        shapes::text(text, pos, self.text_scale, color, &mut self.vertices);
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        font::text_size(text, self.text_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut frame = FrameBuilder::new();
        frame.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), colors::BLACK);
        assert_eq!(frame.vertices().len(), 6);
        frame.clear(colors::BLACK);
        assert!(frame.vertices().is_empty());
        assert_eq!(frame.clear_color, colors::BLACK);
    }

    #[test]
    fn test_centered_text_is_centered() {
        let mut frame = FrameBuilder::new();
        frame.draw_text_centered("II", 400.0, 0.0, colors::BLACK);
        let xs = frame.vertices().iter().map(|v| v.position[0]);
        let (min, max) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
        assert!(((min + max) / 2.0 - 400.0).abs() < 0.01);
    }
}
