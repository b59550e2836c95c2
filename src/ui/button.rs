//! Clickable menu buttons

use glam::Vec2;

use crate::platform::{Canvas, InputEvent};
use crate::renderer::Color;
use crate::sim::Rect;

/// What a button asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    StartGame,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: ButtonAction,
    pub color: Color,
    pub hover_color: Color,
}

impl Button {
    pub fn new(
        rect: Rect,
        label: impl Into<String>,
        action: ButtonAction,
        color: Color,
        hover_color: Color,
    ) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
            color,
            hover_color,
        }
    }

    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.rect.contains_point(pointer)
    }

    /// Draw with the hover color if `pointer` is over the button right now
    pub fn draw(&self, canvas: &mut dyn Canvas, pointer: Vec2, text_color: Color) {
        let fill = if self.is_hovered(pointer) {
            self.hover_color
        } else {
            self.color
        };
        canvas.fill_rect(self.rect, fill);

        let size = canvas.measure_text(&self.label);
        let pos = self.rect.center() - size / 2.0;
        canvas.draw_text(&self.label, pos, text_color);
    }

    /// The bound action, once, for a click inside the button
    pub fn handle_event(&self, event: &InputEvent) -> Option<ButtonAction> {
        match event {
            InputEvent::MouseDown { pos } if self.rect.contains_point(*pos) => Some(self.action),
            _ => None,
        }
    }
}
