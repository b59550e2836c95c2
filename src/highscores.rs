//! High score leaderboard
//!
//! Persisted to a plain-text file (see `persistence`). The in-memory list is
//! authoritative: load and save failures are logged and play continues.

use std::path::PathBuf;

use crate::consts::{HIGH_SCORES_SHOWN, MAX_INITIALS};
use crate::persistence::{PersistenceError, ScoreFile};

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    /// One to three ASCII letters
    pub initials: String,
    /// Winner's final point total
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(initials: impl Into<String>, score: u32) -> Self {
        Self {
            initials: initials.into(),
            score,
        }
    }
}

/// Initials the score file accepts: one to three ASCII letters
pub fn valid_initials(initials: &str) -> bool {
    (1..=MAX_INITIALS).contains(&initials.len())
        && initials.chars().all(|c| c.is_ascii_alphabetic())
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone)]
pub struct HighScores {
    file: ScoreFile,
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Empty leaderboard backed by `path`; nothing is read
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: ScoreFile::new(path),
            entries: Vec::new(),
        }
    }

    /// Load from `path`, falling back to an empty list on any failure.
    /// A malformed file is never partially applied.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut scores = Self::new(path);
        match scores.file.load() {
            Ok(entries) => {
                scores.entries = entries;
                sort_descending(&mut scores.entries);
                log::info!(
                    "High scores loaded successfully ({} entries)",
                    scores.entries.len()
                );
            }
            Err(PersistenceError::NotFound(path)) => {
                log::info!("No high scores at {}, starting fresh", path.display());
            }
            Err(e @ PersistenceError::Parse { .. }) => {
                log::error!("Error processing high scores: {}", e);
            }
            Err(e) => {
                log::error!("Error loading high scores: {}", e);
            }
        }
        scores
    }

    /// Write the full list, overwriting the file. Returns whether it stuck.
    pub fn save(&self) -> bool {
        match self.file.save(&self.entries) {
            Ok(()) => {
                log::info!("High scores saved ({} entries)", self.entries.len());
                true
            }
            Err(e) => {
                log::error!("Error saving high scores: {}", e);
                false
            }
        }
    }

    /// Record a match winner and persist.
    ///
    /// Empty initials mean the player declined; nothing is added or saved.
    /// Initials that are not 1-3 letters are rejected the same way.
    /// Returns the 1-indexed rank of the new entry.
    pub fn record_win(&mut self, initials: &str, score: u32) -> Option<usize> {
        let initials = initials.trim();
        if initials.is_empty() {
            log::debug!("No initials entered, skipping high score");
            return None;
        }
        if !valid_initials(initials) {
            log::debug!("Rejected initials {:?}, skipping high score", initials);
            return None;
        }

        // Insert after any equal scores so earlier holders keep their rank
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        log::info!("High scores updated. New entry: {} - {}", initials, score);
        self.entries.insert(pos, HighScoreEntry::new(initials, score));
        self.save();

        Some(pos + 1)
    }

    /// The entries shown in the menu
    pub fn top(&self) -> &[HighScoreEntry] {
        &self.entries[..self.entries.len().min(HIGH_SCORES_SHOWN)]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_descending(entries: &mut [HighScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}
