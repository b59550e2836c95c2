//! Collision detection and response
//!
//! Resolution runs in a fixed order each tick: walls, paddles, then goals.
//! Bounces are applied before scoring so a ball that touches a wall while
//! crossing a goal line still scores in the same tick.

use super::ball::{Axis, Ball};
use super::geometry::{Field, Rect};
use super::paddle::{Paddle, Side};

/// What the resolver found this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    /// Side that won the point, if the ball crossed a goal line
    pub scorer: Option<Side>,
}

/// Ball touching or past the top or bottom wall
#[inline]
pub fn hits_wall(ball: &Rect, field: &Field) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= field.height
}

/// Which side scores if the ball is at or past a goal line.
/// The left goal is checked first; the two outcomes are exclusive.
pub fn goal_scorer(ball: &Rect, field: &Field) -> Option<Side> {
    if ball.left() <= 0.0 {
        Some(Side::Right)
    } else if ball.right() >= field.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Apply bounces to the ball and report any point scored.
///
/// At most one horizontal bounce happens per tick, even if the ball overlaps
/// both paddles at once. Serving a new ball after a point is left to the caller.
pub fn resolve(ball: &mut Ball, left: &Paddle, right: &Paddle, field: &Field) -> CollisionReport {
    let mut report = CollisionReport::default();

    if hits_wall(&ball.rect, field) {
        ball.bounce(Axis::Vertical);
        report.wall_bounce = true;
    }

    if ball.rect.intersects(&left.rect) || ball.rect.intersects(&right.rect) {
        ball.bounce(Axis::Horizontal);
        report.paddle_bounce = true;
    }

    report.scorer = goal_scorer(&ball.rect, field);
    report
}
