//! Initials entry for a new high score
//!
//! Letters only, upper-cased, at most three. Backspace deletes, Enter
//! confirms. Everything else is ignored.

use crate::consts::MAX_INITIALS;
use crate::platform::{InputEvent, Key};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialsEntry {
    text: String,
}

impl InitialsEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a letter. Returns false if the character was rejected.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() {
            log::debug!("Ignored non-letter initial {:?}", c);
            return false;
        }
        if self.text.len() >= MAX_INITIALS {
            log::debug!("Ignored initial {:?}: already {} letters", c, MAX_INITIALS);
            return false;
        }
        self.text.push(c.to_ascii_uppercase());
        true
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Feed one input event. Returns the initials when the player confirms;
    /// the entry is cleared for the next use.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<String> {
        let InputEvent::KeyDown { key, text } = event else {
            return None;
        };
        match key {
            Key::Enter => return Some(std::mem::take(&mut self.text)),
            Key::Backspace => self.backspace(),
            _ => {
                for c in text.iter().flat_map(|t| t.chars()) {
                    self.push(c);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(c: &str) -> InputEvent {
        InputEvent::KeyDown {
            key: Key::Other,
            text: Some(c.to_string()),
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown { key, text: None }
    }

    #[test]
    fn test_letters_uppercased_and_capped() {
        let mut entry = InitialsEntry::new();
        for c in ["a", "b", "c", "d"] {
            entry.handle_event(&typed(c));
        }
        assert_eq!(entry.text(), "ABC");
    }

    #[test]
    fn test_non_letters_ignored() {
        let mut entry = InitialsEntry::new();
        assert!(!entry.push('1'));
        assert!(!entry.push(' '));
        assert!(!entry.push('é'));
        entry.handle_event(&typed("x!"));
        assert_eq!(entry.text(), "X");
    }

    #[test]
    fn test_backspace() {
        let mut entry = InitialsEntry::new();
        entry.handle_event(&key(Key::Backspace));
        assert_eq!(entry.text(), "");
        entry.handle_event(&typed("q"));
        entry.handle_event(&typed("r"));
        entry.handle_event(&key(Key::Backspace));
        assert_eq!(entry.text(), "Q");
    }

    #[test]
    fn test_enter_confirms_and_clears() {
        let mut entry = InitialsEntry::new();
        entry.handle_event(&typed("z"));
        assert_eq!(entry.handle_event(&key(Key::Enter)), Some("Z".to_string()));
        assert_eq!(entry.text(), "");
        // Confirming nothing yields empty initials
        assert_eq!(entry.handle_event(&key(Key::Enter)), Some(String::new()));
    }

    #[test]
    fn test_mouse_ignored() {
        let mut entry = InitialsEntry::new();
        let click = InputEvent::MouseDown {
            pos: glam::Vec2::ZERO,
        };
        assert_eq!(entry.handle_event(&click), None);
    }
}
