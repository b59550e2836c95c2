//! Pong Ping - two-player table tennis
//!
//! Core modules:
//! - `sim`: Gameplay simulation (paddles, ball physics, collisions, scoring)
//! - `game`: Top-level controller and phase state machine
//! - `ui`: Menu buttons and initials entry
//! - `highscores` / `persistence`: High-score list and its on-disk format
//! - `platform`: Input/render seams plus the native window shell
//! - `renderer`: wgpu pipeline and 2D tessellation
//! - `settings`: Presentation preferences

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Control, GameController, GamePhase};
pub use highscores::{HighScoreEntry, HighScores};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the update/render loop
    pub const TARGET_FPS: u32 = 60;

    /// Field (window) dimensions in logical pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical distance per tick while a key is held
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis speed after a reset (pixels/tick)
    pub const INITIAL_BALL_SPEED: f32 = 3.0;
    /// Speed boost when ball hits paddle (multiplicative, per axis)
    pub const PADDLE_BOOST: f32 = 1.08;

    /// Scoring
    pub const MAX_SCORE: u32 = 5;
    /// Minimum lead required once MAX_SCORE is reached
    pub const WINNING_MARGIN: u32 = 2;

    /// High-score entry rules
    pub const MAX_INITIALS: usize = 3;
    /// Rows shown in the menu table
    pub const HIGH_SCORES_SHOWN: usize = 3;
    pub const HIGH_SCORE_FILE: &str = "high_scores.txt";
}
