//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one frame.

use super::collision;
use super::state::{GameEvent, MatchState};

/// Held-key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Advance the match by one tick: paddles, ball, collisions, scoring.
///
/// After a point the ball is served again from the center, so the next rally
/// starts on the following tick.
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.left_paddle.move_by_input(input.left_up, input.left_down);
    state.right_paddle.move_by_input(input.right_up, input.right_down);

    state.ball.advance();

    let report = collision::resolve(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        &state.field,
    );
    if report.wall_bounce {
        log::info!("Ball bounced on top/bottom: {:?}", state.ball.rect);
        events.push(GameEvent::WallBounce);
    }
    if report.paddle_bounce {
        log::info!(
            "Ball bounced on paddle: {:?} speed {:.2}",
            state.ball.rect,
            state.ball.speed()
        );
        events.push(GameEvent::PaddleBounce);
    }
    if let Some(side) = report.scorer {
        let score = state.score.award(side);
        state.ball.reset();
        log::info!("{} player scored. Score: {}", side.as_str(), score);
        events.push(GameEvent::Scored { side, score });
    }

    events
}
