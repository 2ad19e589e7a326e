//! Portable game record
//!
//! Flat, serialisable shape of a game for storage layers. Converting a game to a
//! record and back is lossless.

use super::state::Game;
use crate::core::{Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored form of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub solution: String,
    #[serde(default)]
    pub guesses: Vec<String>,
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub surrendered: bool,
    #[serde(default)]
    pub hard_mode: bool,
}

/// A stored record that cannot describe a valid game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    InvalidSolution(WordError),
    InvalidGuess { guess: String, source: WordError },
    LengthMismatch { guess: String, expected: usize },
    TooManyGuesses { count: usize, max: usize },
    DuplicateGuess(String),
    /// `solved` disagrees with whether the solution appears among the guesses
    SolvedMismatch { solved: bool },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSolution(e) => write!(f, "Stored solution is invalid: {e}"),
            Self::InvalidGuess { guess, source } => {
                write!(f, "Stored guess '{guess}' is invalid: {source}")
            }
            Self::LengthMismatch { guess, expected } => {
                write!(f, "Stored guess '{guess}' does not have {expected} letters")
            }
            Self::TooManyGuesses { count, max } => {
                write!(f, "Stored game has {count} guesses, at most {max} allowed")
            }
            Self::DuplicateGuess(guess) => write!(f, "Stored guess '{guess}' appears twice"),
            Self::SolvedMismatch { solved: true } => {
                write!(f, "Stored game is marked solved but the solution was never guessed")
            }
            Self::SolvedMismatch { solved: false } => {
                write!(f, "Stored game guessed the solution but is not marked solved")
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSolution(e) | Self::InvalidGuess { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id().to_string(),
            user_id: game.owner().map(str::to_string),
            solution: game.solution().text().to_string(),
            guesses: game.guesses().iter().map(|g| g.text().to_string()).collect(),
            solved: game.solved(),
            surrendered: game.surrendered(),
            hard_mode: game.hard_mode(),
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = RecordError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let solution = Word::new(record.solution).map_err(RecordError::InvalidSolution)?;
        let max = solution.len() + 1;

        if record.guesses.len() > max {
            return Err(RecordError::TooManyGuesses {
                count: record.guesses.len(),
                max,
            });
        }

        let guesses = record
            .guesses
            .into_iter()
            .map(|guess| match Word::new(guess.as_str()) {
                Ok(word) if word.len() == solution.len() => Ok(word),
                Ok(_) => Err(RecordError::LengthMismatch {
                    guess,
                    expected: solution.len(),
                }),
                Err(source) => Err(RecordError::InvalidGuess { guess, source }),
            })
            .collect::<Result<Vec<Word>, _>>()?;

        for (i, guess) in guesses.iter().enumerate() {
            if guesses[..i].contains(guess) {
                return Err(RecordError::DuplicateGuess(guess.text().to_string()));
            }
        }

        if guesses.contains(&solution) != record.solved {
            return Err(RecordError::SolvedMismatch {
                solved: record.solved,
            });
        }

        Ok(Self::restore(
            record.game_id,
            record.user_id,
            solution,
            guesses,
            record.solved,
            record.surrendered,
            record.hard_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn played_game() -> Game {
        let dictionary = Dictionary::new(["crane", "slate", "trace"]);
        let mut game = Game::with_solution(
            "g-42",
            Some("user-7".into()),
            Word::new("crane").unwrap(),
            true,
        );
        game.submit_guess("slate", &dictionary).unwrap();
        game.submit_guess("trace", &dictionary).unwrap();
        game
    }

    #[test]
    fn record_has_all_fields() {
        let record = GameRecord::from(&played_game());

        assert_eq!(record.game_id, "g-42");
        assert_eq!(record.user_id.as_deref(), Some("user-7"));
        assert_eq!(record.solution, "crane");
        assert_eq!(record.guesses, vec!["slate", "trace"]);
        assert!(!record.solved);
        assert!(!record.surrendered);
        assert!(record.hard_mode);
    }

    #[test]
    fn record_round_trip_preserves_game() {
        let mut game = played_game();
        game.surrender().unwrap();

        let json = serde_json::to_string(&GameRecord::from(&game)).unwrap();
        let record: GameRecord = serde_json::from_str(&json).unwrap();
        let restored = Game::try_from(record).unwrap();

        assert_eq!(restored, game);
    }

    #[test]
    fn record_without_owner_omits_field() {
        let game = Game::with_solution("g-1", None, Word::new("crane").unwrap(), false);
        let json = serde_json::to_string(&GameRecord::from(&game)).unwrap();

        assert!(!json.contains("user_id"));
        let restored = Game::try_from(serde_json::from_str::<GameRecord>(&json).unwrap()).unwrap();
        assert_eq!(restored.owner(), None);
    }

    #[test]
    fn record_with_missing_flags_defaults() {
        let json = r#"{"game_id":"g-1","solution":"crane"}"#;
        let game = Game::try_from(serde_json::from_str::<GameRecord>(json).unwrap()).unwrap();

        assert!(game.guesses().is_empty());
        assert!(!game.hard_mode());
        assert!(!game.is_game_over());
    }

    #[test]
    fn invalid_records_rejected() {
        let base = GameRecord::from(&played_game());

        let mut record = base.clone();
        record.solution = "cr4ne".into();
        assert!(matches!(
            Game::try_from(record),
            Err(RecordError::InvalidSolution(_))
        ));

        let mut record = base.clone();
        record.guesses.push("able".into());
        assert!(matches!(
            Game::try_from(record),
            Err(RecordError::LengthMismatch { .. })
        ));

        let mut record = base;
        record.guesses = ["slate", "trace", "irate", "brisk", "ghost", "point", "bread"]
            .map(String::from)
            .to_vec();
        assert_eq!(
            Game::try_from(record),
            Err(RecordError::TooManyGuesses { count: 7, max: 6 })
        );
    }

    #[test]
    fn duplicate_guesses_rejected_after_lowercasing() {
        let mut record = GameRecord::from(&played_game());
        record.guesses = vec!["slate".into(), "SLATE".into()];

        assert_eq!(
            Game::try_from(record),
            Err(RecordError::DuplicateGuess("slate".into()))
        );
    }

    #[test]
    fn solved_flag_must_match_guesses() {
        let mut record = GameRecord::from(&played_game());
        record.solved = true;
        assert_eq!(
            Game::try_from(record),
            Err(RecordError::SolvedMismatch { solved: true })
        );

        let mut record = GameRecord::from(&played_game());
        record.guesses.push("crane".into());
        assert_eq!(
            Game::try_from(record),
            Err(RecordError::SolvedMismatch { solved: false })
        );

        let mut record = GameRecord::from(&played_game());
        record.guesses.push("crane".into());
        record.solved = true;
        let game = Game::try_from(record).unwrap();
        assert!(game.solved());
        assert!(game.is_game_over());
    }
}
