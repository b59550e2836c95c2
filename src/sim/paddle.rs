//! Player paddles

use super::geometry::{Field, Rect};
use crate::consts::*;

/// Which player a paddle (or point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// A vertical paddle that slides along its side of the field
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Lowest allowed bottom edge
    field_height: f32,
}

impl Paddle {
    /// Paddle at its starting spot: inset from its wall, vertically centered
    pub fn new(side: Side, field: &Field) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => field.width - PADDLE_INSET - PADDLE_WIDTH,
        };
        let y = (field.height - PADDLE_HEIGHT) / 2.0;
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            field_height: field.height,
        }
    }

    /// Shift by one speed step per held direction, clamped inside the field
    pub fn move_by_input(&mut self, up: bool, down: bool) {
        let mut dy = 0.0;
        if up {
            dy -= PADDLE_SPEED;
        }
        if down {
            dy += PADDLE_SPEED;
        }
        if dy == 0.0 {
            return;
        }
        let max_y = (self.field_height - self.rect.height).max(0.0);
        self.rect.y = (self.rect.y + dy).clamp(0.0, max_y);
    }
}
