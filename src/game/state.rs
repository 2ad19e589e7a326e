//! Game state machine
//!
//! A `Game` owns one puzzle: the hidden solution, the guesses played so far and
//! the solved/surrendered flags. Every transition validates first and mutates
//! last, so a rejected guess or surrender leaves the game untouched.

use super::error::{GameError, InvalidReason};
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state derived from the game fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    LostSurrendered,
    LostExhausted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::LostSurrendered => "surrendered",
            Self::LostExhausted => "lost",
        };
        f.write_str(label)
    }
}

/// One game of the word puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: String,
    owner: Option<String>,
    solution: Word,
    guesses: Vec<Word>,
    solved: bool,
    surrendered: bool,
    hard_mode: bool,
}

impl Game {
    /// Start a new game with a random solution of `letter_count` letters
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWordsOfLength` if the dictionary has no word of
    /// that length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use wordle_engine::dictionary::Dictionary;
    /// use wordle_engine::game::Game;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate", "able"]);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    ///
    /// let game = Game::new(&dictionary, 5, false, "g1", None, &mut rng).unwrap();
    /// assert_eq!(game.letter_count(), 5);
    /// assert_eq!(game.guesses_remaining(), 6);
    /// assert!(Game::new(&dictionary, 7, false, "g2", None, &mut rng).is_err());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        letter_count: usize,
        hard_mode: bool,
        id: impl Into<String>,
        owner: Option<String>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let solution = dictionary
            .choose(letter_count, rng)
            .ok_or(GameError::NoWordsOfLength(letter_count))?
            .clone();

        Ok(Self::with_solution(id, owner, solution, hard_mode))
    }

    /// Start a new game with a known solution
    #[must_use]
    pub fn with_solution(
        id: impl Into<String>,
        owner: Option<String>,
        solution: Word,
        hard_mode: bool,
    ) -> Self {
        Self {
            id: id.into(),
            owner,
            solution,
            guesses: Vec::new(),
            solved: false,
            surrendered: false,
            hard_mode,
        }
    }

    /// Rebuild a game from stored fields without re-validating history
    pub(super) const fn restore(
        id: String,
        owner: Option<String>,
        solution: Word,
        guesses: Vec<Word>,
        solved: bool,
        surrendered: bool,
        hard_mode: bool,
    ) -> Self {
        Self {
            id,
            owner,
            solution,
            guesses,
            solved,
            surrendered,
            hard_mode,
        }
    }

    /// Play a guess
    ///
    /// The guess is lowercased before any check. On success it is appended to
    /// the history and its feedback returned.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game already ended
    /// - `DuplicateGuess` if the word was already played
    /// - `InvalidGuess` if the length differs from the solution, the guess is
    ///   not made of letters, or it is not in the dictionary
    /// - `HardModeViolation` in hard mode, if a letter the previous guess had
    ///   in the right position is not repeated there
    pub fn submit_guess(
        &mut self,
        raw_guess: &str,
        dictionary: &Dictionary,
    ) -> Result<Feedback, GameError> {
        let guess = self.validate_guess(raw_guess, dictionary)?;
        let feedback = Feedback::calculate(&guess, &self.solution);

        if feedback.is_perfect() {
            self.solved = true;
        }
        self.guesses.push(guess);

        Ok(feedback)
    }

    fn validate_guess(&self, raw_guess: &str, dictionary: &Dictionary) -> Result<Word, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let normalized = raw_guess.to_lowercase();

        if self.guesses.iter().any(|g| g.text() == normalized) {
            return Err(GameError::DuplicateGuess(normalized));
        }

        let actual = normalized.chars().count();
        if actual != self.solution.len() {
            return Err(GameError::InvalidGuess {
                guess: normalized,
                reason: InvalidReason::WrongLength {
                    expected: self.solution.len(),
                    actual,
                },
            });
        }

        let guess = match Word::new(normalized.as_str()) {
            Ok(word) => word,
            Err(e) => {
                return Err(GameError::InvalidGuess {
                    guess: normalized,
                    reason: InvalidReason::NotAWord(e),
                });
            }
        };

        if self.hard_mode {
            self.check_hard_mode(&guess)?;
        }

        if !dictionary.contains(guess.text()) {
            return Err(GameError::InvalidGuess {
                guess: normalized,
                reason: InvalidReason::NotInDictionary,
            });
        }

        Ok(guess)
    }

    /// Only the immediately previous guess is checked, not the whole history.
    fn check_hard_mode(&self, guess: &Word) -> Result<(), GameError> {
        let Some(previous) = self.guesses.last() else {
            return Ok(());
        };

        let feedback = Feedback::calculate(previous, &self.solution);
        for position in feedback.correct_positions() {
            let expected = previous.char_at(position);
            if guess.char_at(position) != expected {
                return Err(GameError::HardModeViolation {
                    position,
                    expected: char::from(expected),
                });
            }
        }

        Ok(())
    }

    /// Give up on the game
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` if the game already ended.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.surrendered = true;
        Ok(())
    }

    /// Maximum number of guesses: one more than the word length
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.solution.len() + 1
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.solved || self.surrendered || self.guesses.len() >= self.max_guesses()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        if self.is_game_over() {
            return 0;
        }
        self.max_guesses() - self.guesses.len()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.solved {
            GameStatus::Won
        } else if self.surrendered {
            GameStatus::LostSurrendered
        } else if self.guesses.len() >= self.max_guesses() {
            GameStatus::LostExhausted
        } else {
            GameStatus::InProgress
        }
    }

    /// Feedback for every guess, in play order
    #[must_use]
    pub fn feedback(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::calculate(guess, &self.solution))
            .collect()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.solution.len()
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn surrendered(&self) -> bool {
        self.surrendered
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// The hidden solution; callers outside the crate go through `projection`
    pub(crate) const fn solution(&self) -> &Word {
        &self.solution
    }
}
