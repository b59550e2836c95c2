//! Platform abstraction layer
//!
//! The game core only talks to the outside world through the types here:
//! - `FrameInput`: per-frame key snapshot, drained event queue, pointer
//! - `Canvas`: drawing primitives the renderer provides
//! - `FrameClock`: fixed-rate frame pacing
//!
//! `native` wires these to winit + wgpu.

pub mod native;
pub mod time;

use std::collections::HashSet;

use glam::Vec2;

use crate::renderer::Color;
use crate::sim::Rect;

pub use time::FrameClock;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Enter,
    Backspace,
    Other,
}

/// Discrete input events, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window close
    Quit,
    /// Key press, with the text it produced (if any)
    KeyDown { key: Key, text: Option<String> },
    /// Primary mouse button press, in field coordinates
    MouseDown { pos: Vec2 },
}

/// Everything the core sees of the input devices for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Keys held down right now
    pub held: HashSet<Key>,
    /// Events since the previous frame
    pub events: Vec<InputEvent>,
    /// Pointer position in field coordinates
    pub pointer: Vec2,
}

impl FrameInput {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }
}

/// Drawing surface for one frame. Coordinates are field pixels.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);
    /// Bounding box size of `text` as `draw_text` would draw it
    fn measure_text(&self, text: &str) -> Vec2;

    /// Draw text horizontally centered on `center_x`
    fn draw_text_centered(&mut self, text: &str, center_x: f32, y: f32, color: Color) {
        let size = self.measure_text(text);
        self.draw_text(text, Vec2::new(center_x - size.x / 2.0, y), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_input_queries() {
        let mut input = FrameInput::default();
        assert!(!input.quit_requested());
        input.held.insert(Key::W);
        input.events.push(InputEvent::MouseDown {
            pos: Vec2::new(1.0, 2.0),
        });
        assert!(input.is_held(Key::W));
        assert!(!input.is_held(Key::S));
        assert!(!input.quit_requested());
        input.events.push(InputEvent::Quit);
        assert!(input.quit_requested());
    }
}
