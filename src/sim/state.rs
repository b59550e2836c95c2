//! Match state and scoring rules
//!
//! Everything that changes during a rally lives in `MatchState`.

use super::ball::Ball;
use super::geometry::Field;
use super::paddle::{Paddle, Side};
use crate::consts::{MAX_SCORE, WINNING_MARGIN};

/// Points for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point, returning the new total for that side
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Win-by-two: a side wins once it has MAX_SCORE and leads by WINNING_MARGIN.
    /// Left is checked first.
    pub fn winner(&self) -> Option<Side> {
        [Side::Left, Side::Right]
            .into_iter()
            .find(|&side| has_won(self.get(side), self.get(side.opponent())))
    }
}

/// Margin rule for a single side
pub fn has_won(score: u32, opponent: u32) -> bool {
    score >= MAX_SCORE && score.saturating_sub(opponent) >= WINNING_MARGIN
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off a paddle
    PaddleBounce,
    /// A side won a point; `score` is its new total
    Scored { side: Side, score: u32 },
}

/// The live match: two paddles, one ball, the score
#[derive(Debug, Clone)]
pub struct MatchState {
    pub field: Field,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl MatchState {
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            left_paddle: Paddle::new(Side::Left, &field),
            right_paddle: Paddle::new(Side::Right, &field),
            ball: Ball::new(field, seed),
            score: Score::default(),
        }
    }

    /// Zero the score and serve a fresh ball. Paddles keep their positions.
    pub fn restart(&mut self) {
        self.score.reset();
        self.ball.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_margin_rule_examples() {
        assert!(has_won(5, 3));
        assert!(!has_won(5, 4));
        assert!(has_won(6, 4));
        assert!(!has_won(4, 0));
        assert!(has_won(5, 0));
        assert!(!has_won(3, 5));
    }

    #[test]
    fn test_winner_sides() {
        assert_eq!(Score::new(5, 2).winner(), Some(Side::Left));
        assert_eq!(Score::new(4, 6).winner(), Some(Side::Right));
        assert_eq!(Score::new(5, 4).winner(), None);
        assert_eq!(Score::new(0, 0).winner(), None);
    }

    #[test]
    fn test_award_and_reset() {
        let mut score = Score::default();
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.award(Side::Right), 2);
        assert_eq!(score.award(Side::Left), 1);
        assert_eq!(score, Score::new(1, 2));
        score.reset();
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_restart_serves_from_center() {
        let mut state = MatchState::new(Field::default(), 3);
        state.score = Score::new(4, 4);
        state.ball.rect.x = 10.0;
        state.restart();
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.rect.center(), state.field.center());
    }

    proptest! {
        #[test]
        fn prop_win_iff_threshold_and_margin(a in 0u32..20, b in 0u32..20) {
            let expected = a >= 5 && a >= b + 2;
            prop_assert_eq!(has_won(a, b), expected);
        }
    }
}
