//! Main menu: Start/Exit buttons, high-score table, instructions

use glam::Vec2;

use super::Palette;
use super::button::{Button, ButtonAction};
use crate::highscores::HighScoreEntry;
use crate::platform::{Canvas, InputEvent};
use crate::sim::{Field, Rect};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// First high-score row and the spacing between rows
const SCORES_TOP: f32 = 100.0;
const SCORES_SPACING: f32 = 40.0;
/// Instructions start this far below the field's vertical center
const INSTRUCTIONS_OFFSET: f32 = 100.0;
const INSTRUCTIONS_SPACING: f32 = 30.0;

pub const INSTRUCTIONS: [&str; 7] = [
    "Controls:",
    "Left Paddle: W (up), S (down)",
    "Right Paddle: UP (up), DOWN (down)",
    "",
    "Win Condition:",
    "First player to score 5 points wins!",
    "Player must win by a margin of 2 points.",
];

#[derive(Debug, Clone)]
pub struct Menu {
    pub buttons: Vec<Button>,
    field: Field,
}

impl Menu {
    pub fn new(field: Field, palette: &Palette) -> Self {
        let x = field.width / 2.0 - BUTTON_WIDTH / 2.0;
        let mid = field.height / 2.0;
        let button = |y: f32, label: &str, action: ButtonAction| {
            Button::new(
                Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
                label,
                action,
                palette.button,
                palette.button_hover,
            )
        };
        Self {
            buttons: vec![
                button(mid - BUTTON_HEIGHT, "Start", ButtonAction::StartGame),
                button(mid + BUTTON_HEIGHT, "Exit", ButtonAction::Exit),
            ],
            field,
        }
    }

    /// Action of the first button the event clicks, if any
    pub fn handle_event(&self, event: &InputEvent) -> Option<ButtonAction> {
        self.buttons.iter().find_map(|b| b.handle_event(event))
    }

    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        pointer: Vec2,
        palette: &Palette,
        top_scores: &[HighScoreEntry],
    ) {
        for button in &self.buttons {
            button.draw(canvas, pointer, palette.foreground);
        }

        let center_x = self.field.width / 2.0;
        for (i, entry) in top_scores.iter().enumerate() {
            let line = format!("{}. {}: {}", i + 1, entry.initials, entry.score);
            let y = SCORES_TOP + i as f32 * SCORES_SPACING;
            canvas.draw_text_centered(&line, center_x, y, palette.foreground);
        }

        let top = self.field.height / 2.0 + INSTRUCTIONS_OFFSET;
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            let y = top + i as f32 * INSTRUCTIONS_SPACING;
            canvas.draw_text_centered(line, center_x, y, palette.foreground);
        }
    }
}
