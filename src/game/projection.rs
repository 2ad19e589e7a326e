//! Public view of a game
//!
//! `GameView` is what callers get to see. The solution is only filled in once
//! the game is over.

use super::state::{Game, GameStatus};
use crate::core::{AlphabetEntry, Feedback, alphabet_view, confirmed_position_letters};
use serde::Serialize;

/// Solution-hiding snapshot of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_id: String,
    /// Revealed only when the game is over
    pub solution: Option<String>,
    pub guesses: Vec<String>,
    /// Feedback for each guess, parallel to `guesses`
    pub feedback: Vec<Feedback>,
    pub letter_bank: Vec<AlphabetEntry>,
    pub confirmed_letters: Vec<char>,
    pub letter_count: usize,
    pub guesses_remaining: usize,
    pub solved: bool,
    pub surrendered: bool,
    pub hard_mode: bool,
    pub game_over: bool,
    pub status: GameStatus,
}

impl GameView {
    /// Emoji grid of all guesses, one line per guess
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.feedback
            .iter()
            .map(Feedback::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Game {
    /// Build the public view of this game
    #[must_use]
    pub fn projection(&self) -> GameView {
        let game_over = self.is_game_over();

        GameView {
            game_id: self.id().to_string(),
            solution: game_over.then(|| self.solution().text().to_string()),
            guesses: self.guesses().iter().map(|g| g.text().to_string()).collect(),
            feedback: self.feedback(),
            letter_bank: alphabet_view(self.guesses(), self.solution()),
            confirmed_letters: confirmed_position_letters(self.guesses(), self.solution()),
            letter_count: self.letter_count(),
            guesses_remaining: self.guesses_remaining(),
            solved: self.solved(),
            surrendered: self.surrendered(),
            hard_mode: self.hard_mode(),
            game_over,
            status: self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Word};
    use crate::dictionary::Dictionary;

    fn setup() -> (Dictionary, Game) {
        let dictionary = Dictionary::new(["crane", "slate", "trace", "irate"]);
        let game = Game::with_solution("g-1", None, Word::new("crane").unwrap(), false);
        (dictionary, game)
    }

    #[test]
    fn fresh_game_view() {
        let (_, game) = setup();
        let view = game.projection();

        assert_eq!(view.game_id, "g-1");
        assert_eq!(view.solution, None);
        assert!(view.guesses.is_empty());
        assert!(view.feedback.is_empty());
        assert_eq!(view.letter_bank.len(), 26);
        assert!(view.confirmed_letters.is_empty());
        assert_eq!(view.letter_count, 5);
        assert_eq!(view.guesses_remaining, 6);
        assert!(!view.game_over);
        assert_eq!(view.status, GameStatus::InProgress);
    }

    #[test]
    fn solution_hidden_while_in_progress() {
        let (dictionary, mut game) = setup();
        game.submit_guess("slate", &dictionary).unwrap();
        game.submit_guess("trace", &dictionary).unwrap();

        let view = game.projection();
        assert_eq!(view.solution, None);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("crane"));
    }

    #[test]
    fn solution_revealed_when_over() {
        let (_, mut game) = setup();
        game.surrender().unwrap();

        let view = game.projection();
        assert_eq!(view.solution.as_deref(), Some("crane"));
        assert!(view.game_over);
        assert!(view.surrendered);
        assert_eq!(view.guesses_remaining, 0);
        assert_eq!(view.status, GameStatus::LostSurrendered);
    }

    #[test]
    fn view_reflects_history() {
        let (dictionary, mut game) = setup();
        game.submit_guess("slate", &dictionary).unwrap();

        let view = game.projection();
        assert_eq!(view.guesses, vec!["slate"]);
        assert_eq!(view.feedback[0].to_string(), "--G-G");
        assert_eq!(view.confirmed_letters, vec!['a', 'e']);
        assert_eq!(view.letter_bank[0].status, LetterStatus::Present);
        assert_eq!(view.letter_bank[usize::from(b's' - b'a')].status, LetterStatus::Absent);
        assert_eq!(view.guesses_remaining, 5);
    }

    #[test]
    fn projection_is_idempotent() {
        let (dictionary, mut game) = setup();
        game.submit_guess("trace", &dictionary).unwrap();

        assert_eq!(game.projection(), game.projection());
    }

    #[test]
    fn share_grid_lines() {
        let (dictionary, mut game) = setup();
        game.submit_guess("slate", &dictionary).unwrap();
        game.submit_guess("crane", &dictionary).unwrap();

        assert_eq!(game.projection().share_grid(), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }
}
