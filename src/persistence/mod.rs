//! High-score file format
//!
//! Plain text, one `INITIALS,SCORE` entry per line, no header. Blank lines
//! are skipped. Any other malformed line fails the whole load.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::highscores::{HighScoreEntry, valid_initials};

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("no score file at {0}")]
    NotFound(PathBuf),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a single non-blank line. `line_no` is 1-based, for error messages.
pub fn parse_line(text: &str, line_no: usize) -> Result<HighScoreEntry, PersistenceError> {
    let parse_err = |reason: String| PersistenceError::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = text.trim().split(',').collect();
    let [initials, score] = fields.as_slice() else {
        return Err(parse_err(format!(
            "expected 2 fields, found {}",
            fields.len()
        )));
    };
    let score = score
        .trim()
        .parse::<u32>()
        .map_err(|e| parse_err(format!("bad score {:?}: {}", score, e)))?;

    let initials = initials.trim();
    if !valid_initials(initials) {
        return Err(parse_err(format!("bad initials {:?}", initials)));
    }

    Ok(HighScoreEntry::new(initials, score))
}

/// Parse a whole file's contents, in file order
pub fn parse_entries(contents: &str) -> Result<Vec<HighScoreEntry>, PersistenceError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Serialize entries, one line each, in the given order
pub fn format_entries(entries: &[HighScoreEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{},{}\n", e.initials, e.score))
        .collect()
}

/// A score file on disk
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every entry. Missing file is `NotFound`, not `Io`.
    pub fn load(&self) -> Result<Vec<HighScoreEntry>, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        parse_entries(&contents)
    }

    /// Overwrite the file with `entries`
    pub fn save(&self, entries: &[HighScoreEntry]) -> Result<(), PersistenceError> {
        fs::write(&self.path, format_entries(entries))?;
        Ok(())
    }
}
