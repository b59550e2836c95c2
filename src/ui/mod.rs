//! Menu widgets and text entry

pub mod button;
pub mod initials;
pub mod menu;

pub use button::{Button, ButtonAction};
pub use initials::InitialsEntry;
pub use menu::Menu;

use crate::renderer::{Color, colors};

/// Colors used to draw every screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub button: Color,
    pub button_hover: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::WHITE,
            foreground: colors::BLACK,
            button: colors::GRAY,
            button_hover: colors::WHITE,
        }
    }
}

impl Palette {
    /// Light-on-dark variant
    pub fn high_contrast() -> Self {
        Self {
            background: colors::BLACK,
            foreground: colors::WHITE,
            button: colors::DARK_GRAY,
            button_hover: colors::HIGHLIGHT,
        }
    }

    pub fn for_settings(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::default()
        }
    }
}
