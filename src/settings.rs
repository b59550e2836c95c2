//! Game settings and preferences
//!
//! Presentation only; gameplay rules are constants. Stored as JSON next to
//! the high-score file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::HIGH_SCORE_FILE;

pub const SETTINGS_FILE: &str = "pong_settings.json";

const MIN_WINDOW_SCALE: f32 = 0.5;
const MAX_WINDOW_SCALE: f32 = 3.0;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where high scores are read from and written to
    pub high_score_path: PathBuf,
    /// Log file; stderr is used if it cannot be opened
    pub log_path: PathBuf,
    /// Initial window size as a multiple of the field size
    pub window_scale: f32,
    /// Show FPS counter
    pub show_fps: bool,
    /// Light-on-dark palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            log_path: PathBuf::from("pong_game.log"),
            window_scale: 1.0,
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Window scale clamped to a usable range
    pub fn effective_window_scale(&self) -> f32 {
        if self.window_scale.is_finite() {
            self.window_scale.clamp(MIN_WINDOW_SCALE, MAX_WINDOW_SCALE)
        } else {
            1.0
        }
    }

    /// Load settings, falling back to defaults on any problem.
    ///
    /// Runs before logging is configured, so the outcome is returned as a
    /// message for the caller to log.
    pub fn load(path: &Path) -> (Self, String) {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => (settings, format!("Loaded settings from {}", path.display())),
                Err(e) => (
                    Self::default(),
                    format!("Bad settings file {}: {}; using defaults", path.display(), e),
                ),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                (Self::default(), "Using default settings".to_string())
            }
            Err(e) => (
                Self::default(),
                format!("Could not read {}: {}; using defaults", path.display(), e),
            ),
        }
    }

    /// Write these settings to `path` only if nothing is there yet, so a
    /// first run leaves an editable file behind. Returns whether it wrote.
    pub fn save_if_missing(&self, path: &Path) -> bool {
        if path.exists() {
            return false;
        }
        self.save(path)
    }

    /// Save settings as pretty JSON. Failures are logged, never fatal.
    pub fn save(&self, path: &Path) -> bool {
        let result = serde_json::to_string_pretty(self)
            .map_err(std::io::Error::from)
            .and_then(|json| fs::write(path, json));
        match result {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::error!("Error saving settings: {}", e);
                false
            }
        }
    }
}
