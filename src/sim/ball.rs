//! The ball: position, velocity and rally reset

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Field, Rect};
use crate::consts::*;

/// Velocity component a bounce inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Paddle hit: flips vx and speeds the ball up
    Horizontal,
    /// Wall hit: flips vy
    Vertical,
}

/// The ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
    field: Field,
    rng: Pcg32,
}

impl Ball {
    /// Create a ball already reset to the field center
    pub fn new(field: Field, seed: u64) -> Self {
        let mut ball = Self {
            rect: Rect::centered(field.center(), BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
            field,
            rng: Pcg32::seed_from_u64(seed),
        };
        ball.reset();
        ball
    }

    /// Advance by the current velocity. Bounds are the caller's problem.
    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    pub fn bounce(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => {
                self.vel.x = -self.vel.x;
                self.increase_speed();
            }
            Axis::Vertical => self.vel.y = -self.vel.y,
        }
    }

    /// Compound both components by the paddle boost
    pub fn increase_speed(&mut self) {
        self.vel *= PADDLE_BOOST;
    }

    /// Re-center and pick one of the four diagonal directions at initial speed
    pub fn reset(&mut self) {
        self.rect = Rect::centered(self.field.center(), BALL_SIZE, BALL_SIZE);
        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * INITIAL_BALL_SPEED, sy * INITIAL_BALL_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn initial_speed() -> f32 {
        Vec2::splat(INITIAL_BALL_SPEED).length()
    }

    #[test]
    fn test_reset_centers_ball() {
        let field = Field::default();
        let mut ball = Ball::new(field, 7);
        ball.rect.x = 3.0;
        ball.rect.y = 590.0;
        ball.vel = Vec2::new(10.0, -12.0);
        ball.reset();
        assert_eq!(ball.rect.center(), field.center());
        assert_eq!(ball.vel.x.abs(), INITIAL_BALL_SPEED);
        assert_eq!(ball.vel.y.abs(), INITIAL_BALL_SPEED);
    }

    #[test]
    fn test_reset_covers_all_directions() {
        let mut ball = Ball::new(Field::default(), 12345);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            ball.reset();
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_advance_has_no_bounds() {
        let mut ball = Ball::new(Field::default(), 1);
        ball.vel = Vec2::new(-500.0, 0.0);
        ball.advance();
        assert!(ball.rect.right() < 0.0);
    }

    #[test]
    fn test_vertical_bounce_keeps_speed() {
        let mut ball = Ball::new(Field::default(), 1);
        ball.vel = Vec2::new(3.0, -3.0);
        ball.bounce(Axis::Vertical);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
        assert!((ball.speed() - initial_speed()).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_bounce_speeds_up() {
        let mut ball = Ball::new(Field::default(), 1);
        ball.vel = Vec2::new(3.0, -3.0);
        ball.bounce(Axis::Horizontal);
        assert!((ball.vel.x - (-3.0 * 1.08)).abs() < 1e-5);
        assert!((ball.vel.y - (-3.0 * 1.08)).abs() < 1e-5);
    }

    #[test]
    fn test_same_seed_same_serves() {
        let mut a = Ball::new(Field::default(), 99);
        let mut b = Ball::new(Field::default(), 99);
        for _ in 0..20 {
            a.reset();
            b.reset();
            assert_eq!(a.vel, b.vel);
        }
    }

    proptest! {
        #[test]
        fn prop_speed_compounds_only_on_paddle_hits(bounces in prop::collection::vec(any::<bool>(), 0..30), seed in any::<u64>()) {
            let mut ball = Ball::new(Field::default(), seed);
            let mut paddle_hits = 0;
            for paddle in bounces {
                if paddle {
                    ball.bounce(Axis::Horizontal);
                    paddle_hits += 1;
                } else {
                    ball.bounce(Axis::Vertical);
                }
            }
            let expected = initial_speed() * PADDLE_BOOST.powi(paddle_hits);
            prop_assert!((ball.speed() - expected).abs() <= expected * 1e-4);
        }
    }
}
