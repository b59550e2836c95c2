//! Top-level game controller
//!
//! Owns the match, the menu and the high-score list, and runs the phase state
//! machine once per frame:
//!
//! ```text
//! Menu --Start--> Playing --win--> EnteringInitials --Enter--> Menu
//! ```
//!
//! Exit (button or window close) ends the loop from any phase.

use glam::Vec2;

use crate::highscores::HighScores;
use crate::platform::{Canvas, FrameInput, InputEvent, Key};
use crate::settings::Settings;
use crate::sim::{Field, MatchState, Side, TickInput, tick};
use crate::ui::{ButtonAction, InitialsEntry, Menu, Palette};

const TITLE: &str = "Pong Game";
const TITLE_Y: f32 = 10.0;
const SCORE_Y: f32 = 20.0;
/// Score text is pulled this far toward the center from the quarter lines
const SCORE_INSET: f32 = 50.0;
const PROMPT: &str = "Enter your initials (3 letters):";
const PROMPT_OFFSET: f32 = 50.0;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start/Exit buttons, high scores, instructions
    Menu,
    /// Active match
    Playing,
    /// Match won; capturing the winner's initials
    EnteringInitials { winner: Side, score: u32 },
}

/// What the shell should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct GameController {
    field: Field,
    phase: GamePhase,
    state: MatchState,
    high_scores: HighScores,
    menu: Menu,
    initials: InitialsEntry,
    palette: Palette,
}

impl GameController {
    pub fn new(field: Field, high_scores: HighScores, settings: &Settings, seed: u64) -> Self {
        let palette = Palette::for_settings(settings.high_contrast);
        log::info!("Game initialized (seed {})", seed);
        Self {
            field,
            phase: GamePhase::Menu,
            state: MatchState::new(field, seed),
            high_scores,
            menu: Menu::new(field, &palette),
            initials: InitialsEntry::new(),
            palette,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn initials(&self) -> &InitialsEntry {
        &self.initials
    }

    /// Reset scores, serve a fresh ball and enter play
    pub fn start_game(&mut self) {
        self.state.restart();
        self.phase = GamePhase::Playing;
        log::info!("Game started");
    }

    /// Run one frame of game logic against this frame's input
    pub fn frame(&mut self, input: &FrameInput) -> Control {
        if input.quit_requested() {
            log::info!("Quit requested");
            return Control::Exit;
        }

        match self.phase {
            GamePhase::Menu => {
                // First click on a button wins; later events this frame are dropped
                for event in &input.events {
                    if let Some(action) = self.menu.handle_event(event) {
                        return self.apply(action);
                    }
                }
            }
            GamePhase::Playing => self.update_playing(input),
            GamePhase::EnteringInitials { winner, score } => {
                self.update_initials(&input.events, winner, score)
            }
        }
        Control::Continue
    }

    fn apply(&mut self, action: ButtonAction) -> Control {
        match action {
            ButtonAction::StartGame => {
                self.start_game();
                Control::Continue
            }
            ButtonAction::Exit => {
                log::info!("Exit selected");
                Control::Exit
            }
        }
    }

    fn update_playing(&mut self, input: &FrameInput) {
        let tick_input = TickInput {
            left_up: input.is_held(Key::W),
            left_down: input.is_held(Key::S),
            right_up: input.is_held(Key::Up),
            right_down: input.is_held(Key::Down),
        };
        tick(&mut self.state, &tick_input);

        if let Some(winner) = self.state.score.winner() {
            let score = self.state.score.get(winner);
            log::info!(
                "{} player wins {}-{}",
                winner.as_str(),
                self.state.score.left,
                self.state.score.right
            );
            self.initials.clear();
            self.phase = GamePhase::EnteringInitials { winner, score };
        }
    }

    fn update_initials(&mut self, events: &[InputEvent], winner: Side, score: u32) {
        for event in events {
            if let Some(initials) = self.initials.handle_event(event) {
                match self.high_scores.record_win(&initials, score) {
                    Some(rank) => log::info!(
                        "{} player recorded as {} (rank {})",
                        winner.as_str(),
                        initials,
                        rank
                    ),
                    None => log::info!("{} player declined a high score", winner.as_str()),
                }
                self.phase = GamePhase::Menu;
                return;
            }
        }
    }

    /// Draw the current phase. `pointer` drives button hover.
    pub fn draw(&self, canvas: &mut dyn Canvas, pointer: Vec2) {
        let palette = &self.palette;
        canvas.clear(palette.background);
        let center_x = self.field.width / 2.0;

        match self.phase {
            GamePhase::Menu => {
                canvas.draw_text_centered(TITLE, center_x, TITLE_Y, palette.foreground);
                self.menu
                    .draw(canvas, pointer, palette, self.high_scores.top());
            }
            GamePhase::Playing => {
                canvas.draw_text_centered(TITLE, center_x, TITLE_Y, palette.foreground);
                canvas.fill_rect(self.state.left_paddle.rect, palette.foreground);
                canvas.fill_rect(self.state.right_paddle.rect, palette.foreground);
                canvas.fill_ellipse(self.state.ball.rect, palette.foreground);
                self.draw_scores(canvas);
            }
            GamePhase::EnteringInitials { .. } => {
                let mid = self.field.height / 2.0;
                canvas.draw_text_centered(PROMPT, center_x, mid - PROMPT_OFFSET, palette.foreground);
                canvas.draw_text_centered(
                    self.initials.text(),
                    center_x,
                    mid + PROMPT_OFFSET,
                    palette.foreground,
                );
            }
        }
    }

    fn draw_scores(&self, canvas: &mut dyn Canvas) {
        let score = &self.state.score;
        let left_x = self.field.width / 4.0 + SCORE_INSET;
        let right_x = 3.0 * self.field.width / 4.0 - SCORE_INSET;
        canvas.draw_text(
            &score.left.to_string(),
            Vec2::new(left_x, SCORE_Y),
            self.palette.foreground,
        );
        canvas.draw_text(
            &score.right.to_string(),
            Vec2::new(right_x, SCORE_Y),
            self.palette.foreground,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Score;

    fn controller(dir: &tempfile::TempDir) -> GameController {
        let scores = HighScores::new(dir.path().join("high_scores.txt"));
        GameController::new(Field::default(), scores, &Settings::default(), 4242)
    }

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            events: vec![InputEvent::MouseDown {
                pos: Vec2::new(x, y),
            }],
            ..Default::default()
        }
    }

    fn key(key: Key, text: Option<&str>) -> FrameInput {
        FrameInput {
            events: vec![InputEvent::KeyDown {
                key,
                text: text.map(str::to_string),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let dir = tempfile::tempdir().unwrap();
        let game = controller(&dir);
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_start_button_resets_match() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.match_state_mut().score = Score::new(3, 1);
        assert_eq!(game.frame(&click(400.0, 275.0)), Control::Continue);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.match_state().score, Score::default());
        assert_eq!(
            game.match_state().ball.rect.center(),
            Field::default().center()
        );
    }

    #[test]
    fn test_exit_button_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        assert_eq!(game.frame(&click(400.0, 375.0)), Control::Exit);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.start_game();
        let quit = FrameInput {
            events: vec![InputEvent::Quit],
            ..Default::default()
        };
        assert_eq!(game.frame(&quit), Control::Exit);
    }

    #[test]
    fn test_menu_ignores_keys_and_play_ignores_clicks() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.frame(&key(Key::Enter, None));
        assert_eq!(game.phase(), GamePhase::Menu);

        game.start_game();
        assert_eq!(game.frame(&click(400.0, 375.0)), Control::Continue);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_held_keys_move_paddles() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.start_game();
        let mut input = FrameInput::default();
        input.held.insert(Key::W);
        input.held.insert(Key::Down);
        game.frame(&input);
        assert_eq!(game.match_state().left_paddle.rect.y, 245.0);
        assert_eq!(game.match_state().right_paddle.rect.y, 255.0);
    }

    #[test]
    fn test_win_then_initials_then_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.start_game();
        game.match_state_mut().score = Score::new(5, 2);
        game.frame(&FrameInput::default());
        assert_eq!(
            game.phase(),
            GamePhase::EnteringInitials {
                winner: Side::Left,
                score: 5
            }
        );

        game.frame(&key(Key::Other, Some("j")));
        game.frame(&key(Key::Other, Some("d")));
        assert_eq!(game.initials().text(), "JD");
        game.frame(&key(Key::Enter, None));
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.high_scores().entries[0].initials, "JD");
        assert_eq!(game.high_scores().entries[0].score, 5);
    }

    #[test]
    fn test_no_win_without_margin() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.start_game();
        game.match_state_mut().score = Score::new(5, 4);
        game.frame(&FrameInput::default());
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_declined_initials_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = controller(&dir);
        game.start_game();
        game.match_state_mut().score = Score::new(1, 6);
        game.frame(&FrameInput::default());
        game.frame(&key(Key::Enter, None));
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.high_scores().is_empty());
        assert!(!dir.path().join("high_scores.txt").exists());
    }
}
