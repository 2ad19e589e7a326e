//! Game rule violations

use crate::core::WordError;
use std::fmt;

/// Why a guess was rejected as invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    WrongLength { expected: usize, actual: usize },
    NotAWord(WordError),
    NotInDictionary,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} letters, got {actual}")
            }
            Self::NotAWord(e) => write!(f, "{e}"),
            Self::NotInDictionary => write!(f, "not in the word list"),
        }
    }
}

/// Errors raised by game transitions
///
/// A failed transition never leaves a partially updated game behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is already won or lost
    GameOver,
    /// The guess was already played in this game
    DuplicateGuess(String),
    /// The guess has the wrong length, is malformed, or is not in the dictionary
    InvalidGuess { guess: String, reason: InvalidReason },
    /// Hard mode: the guess drops a letter confirmed by the previous guess
    HardModeViolation { position: usize, expected: char },
    /// The dictionary has no word of the requested length
    NoWordsOfLength(usize),
}

impl GameError {
    /// Whether the same game can accept a different guess after this error
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateGuess(_) | Self::InvalidGuess { .. } | Self::HardModeViolation { .. }
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is over"),
            Self::DuplicateGuess(guess) => write!(f, "Guess already made: {guess}"),
            Self::InvalidGuess { guess, reason } => {
                write!(f, "Invalid guess '{guess}': {reason}")
            }
            Self::HardModeViolation { position, expected } => write!(
                f,
                "Hard mode violation: letter {} must be '{expected}'",
                position + 1
            ),
            Self::NoWordsOfLength(len) => write!(f, "No words with {len} letters available"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_kinds() {
        assert!(!GameError::GameOver.is_retryable());
        assert!(!GameError::NoWordsOfLength(9).is_retryable());
        assert!(GameError::DuplicateGuess("crane".into()).is_retryable());
        assert!(
            GameError::HardModeViolation {
                position: 0,
                expected: 'b'
            }
            .is_retryable()
        );
        assert!(
            GameError::InvalidGuess {
                guess: "zzzzz".into(),
                reason: InvalidReason::NotInDictionary
            }
            .is_retryable()
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(GameError::GameOver.to_string(), "Game is over");
        assert_eq!(
            GameError::HardModeViolation {
                position: 0,
                expected: 'b'
            }
            .to_string(),
            "Hard mode violation: letter 1 must be 'b'"
        );
        assert_eq!(
            GameError::InvalidGuess {
                guess: "cat".into(),
                reason: InvalidReason::WrongLength {
                    expected: 5,
                    actual: 3
                }
            }
            .to_string(),
            "Invalid guess 'cat': expected 5 letters, got 3"
        );
    }
}
