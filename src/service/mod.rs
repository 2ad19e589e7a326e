//! Game service
//!
//! Glue between the pure game engine and a storage collaborator: each call
//! loads a record, applies one transition, stores the result and hands back
//! the public view. Games may be scoped to an owning user id; another user's
//! game is reported as not found.

pub mod file;
pub mod repository;

pub use file::JsonFileRepository;
pub use repository::{GameRepository, InMemoryRepository, StorageError};

use crate::dictionary::Dictionary;
use crate::game::{Game, GameError, GameRecord, GameView, RecordError};
use rand::Rng;
use std::fmt;

/// Errors returned by the service
#[derive(Debug)]
pub enum ServiceError {
    /// No game with this id (for this owner)
    NotFound(String),
    /// The game rejected the operation
    Game(GameError),
    /// A stored record is corrupt
    Record(RecordError),
    Storage(StorageError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Game {id} not found"),
            Self::Game(e) => write!(f, "{e}"),
            Self::Record(e) => write!(f, "{e}"),
            Self::Storage(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Game(e) => Some(e),
            Self::Record(e) => Some(e),
            Self::Storage(e) => Some(e),
        }
    }
}

impl From<GameError> for ServiceError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<RecordError> for ServiceError {
    fn from(e: RecordError) -> Self {
        Self::Record(e)
    }
}

impl From<StorageError> for ServiceError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

/// Generate a new game id: 32 lowercase hex characters
pub fn generate_game_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:032x}", rng.random::<u128>())
}

/// Game service over a repository and a dictionary
pub struct WordleService<'a, R: GameRepository> {
    repository: R,
    dictionary: &'a Dictionary,
}

impl<'a, R: GameRepository> WordleService<'a, R> {
    pub const fn new(repository: R, dictionary: &'a Dictionary) -> Self {
        Self {
            repository,
            dictionary,
        }
    }

    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and store a new game with a random solution
    ///
    /// # Errors
    ///
    /// `Game(NoWordsOfLength)` if the dictionary has no word of that length, or
    /// a storage error.
    pub fn create_game(
        &mut self,
        letter_count: usize,
        hard_mode: bool,
        owner: Option<&str>,
    ) -> Result<GameView, ServiceError> {
        self.create_game_with_rng(letter_count, hard_mode, owner, &mut rand::rng())
    }

    /// Same as `create_game`, drawing the id and solution from `rng`
    ///
    /// # Errors
    ///
    /// See `create_game`.
    pub fn create_game_with_rng<G: Rng + ?Sized>(
        &mut self,
        letter_count: usize,
        hard_mode: bool,
        owner: Option<&str>,
        rng: &mut G,
    ) -> Result<GameView, ServiceError> {
        let id = generate_game_id(rng);
        let game = Game::new(
            self.dictionary,
            letter_count,
            hard_mode,
            id,
            owner.map(str::to_string),
            rng,
        )?;

        self.repository.create(GameRecord::from(&game))?;
        Ok(game.projection())
    }

    /// Fetch the public view of a game
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown ids or another owner's game.
    pub fn get_game(&self, game_id: &str, owner: Option<&str>) -> Result<GameView, ServiceError> {
        Ok(self.load(game_id, owner)?.projection())
    }

    /// Play a guess in a stored game
    ///
    /// # Errors
    ///
    /// `NotFound`, any `GameError` from the guess, or a storage error. The
    /// stored game is only rewritten when the guess is accepted.
    pub fn make_guess(
        &mut self,
        game_id: &str,
        owner: Option<&str>,
        guess: &str,
    ) -> Result<GameView, ServiceError> {
        let mut game = self.load(game_id, owner)?;
        game.submit_guess(guess, self.dictionary)?;
        self.repository.update(GameRecord::from(&game))?;
        Ok(game.projection())
    }

    /// Surrender a stored game
    ///
    /// # Errors
    ///
    /// `NotFound`, `Game(GameOver)` if it already ended, or a storage error.
    pub fn surrender(
        &mut self,
        game_id: &str,
        owner: Option<&str>,
    ) -> Result<GameView, ServiceError> {
        let mut game = self.load(game_id, owner)?;
        game.surrender()?;
        self.repository.update(GameRecord::from(&game))?;
        Ok(game.projection())
    }

    /// Views of all games owned by `owner` (unowned games when `None`)
    ///
    /// # Errors
    ///
    /// A storage error, or `Record` if a stored game is corrupt.
    pub fn list_games(&self, owner: Option<&str>) -> Result<Vec<GameView>, ServiceError> {
        self.repository
            .list()?
            .into_iter()
            .filter(|record| Self::visible_to(record, owner))
            .map(|record| -> Result<GameView, ServiceError> {
                Ok(Game::try_from(record)?.projection())
            })
            .collect()
    }

    fn visible_to(record: &GameRecord, owner: Option<&str>) -> bool {
        record.user_id.as_deref() == owner
    }

    fn load(&self, game_id: &str, owner: Option<&str>) -> Result<Game, ServiceError> {
        let record = self
            .repository
            .get(game_id)?
            .filter(|record| Self::visible_to(record, owner))
            .ok_or_else(|| ServiceError::NotFound(game_id.to_string()))?;

        Ok(Game::try_from(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn game_ids_are_hex() {
        let mut rng = StdRng::seed_from_u64(9);
        let id = generate_game_id(&mut rng);
        assert_eq!(id.len(), 32);
        assert!(id.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(id, generate_game_id(&mut rng));
    }

    #[test]
    fn create_then_get() {
        let dictionary = Dictionary::new(["crane"]);
        let mut service = WordleService::new(InMemoryRepository::new(), &dictionary);

        let view = service.create_game(5, false, None).unwrap();
        assert_eq!(view.solution, None);
        assert_eq!(service.repository().len(), 1);

        let fetched = service.get_game(&view.game_id, None).unwrap();
        assert_eq!(fetched, view);
    }

    #[test]
    fn create_with_unknown_length_stores_nothing() {
        let dictionary = Dictionary::new(["crane"]);
        let mut service = WordleService::new(InMemoryRepository::new(), &dictionary);

        assert!(matches!(
            service.create_game(7, false, None),
            Err(ServiceError::Game(GameError::NoWordsOfLength(7)))
        ));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn unknown_game_not_found() {
        let dictionary = Dictionary::new(["crane"]);
        let service = WordleService::new(InMemoryRepository::new(), &dictionary);

        assert!(matches!(
            service.get_game("nope", None),
            Err(ServiceError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn anonymous_caller_cannot_touch_owned_game() {
        let dictionary = Dictionary::new(["crane", "trace"]);
        let game = Game::with_solution(
            "g1",
            Some("alice".to_string()),
            crate::core::Word::new("crane").unwrap(),
            false,
        );
        let mut repository = InMemoryRepository::new();
        repository.create(GameRecord::from(&game)).unwrap();
        let mut service = WordleService::new(repository, &dictionary);

        assert!(matches!(
            service.make_guess("g1", None, "trace"),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.surrender("g1", None),
            Err(ServiceError::NotFound(_))
        ));
        assert!(service.list_games(None).unwrap().is_empty());

        let view = service.get_game("g1", Some("alice")).unwrap();
        assert!(view.guesses.is_empty());
        assert!(!view.surrendered);
    }
}
