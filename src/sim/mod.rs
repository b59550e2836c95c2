//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Axis, Ball};
pub use collision::{CollisionReport, goal_scorer, hits_wall, resolve};
pub use geometry::{Field, Rect};
pub use paddle::{Paddle, Side};
pub use state::{GameEvent, MatchState, Score, has_won};
pub use tick::{TickInput, tick};
