//! Game storage
//!
//! The engine itself never stores anything. A `GameRepository` keeps
//! `GameRecord`s by game id; the service does fetch-modify-store around each
//! transition.

use crate::game::GameRecord;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;

/// Storage failures
#[derive(Debug)]
pub enum StorageError {
    /// A record with this id already exists
    AlreadyExists(String),
    /// No record with this id to update
    Missing(String),
    /// The id cannot be used as a storage key
    InvalidId(String),
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists(id) => write!(f, "Game {id} already exists"),
            Self::Missing(id) => write!(f, "Game {id} does not exist"),
            Self::InvalidId(id) => write!(f, "'{id}' is not a valid game id"),
            Self::Io(e) => write!(f, "Storage I/O error: {e}"),
            Self::Serialization(e) => write!(f, "Stored game is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Persistence collaborator for game records
pub trait GameRepository {
    /// Store a new record
    ///
    /// # Errors
    ///
    /// Fails with `AlreadyExists` if the id is taken, or on storage failure.
    fn create(&mut self, record: GameRecord) -> Result<(), StorageError>;

    /// Fetch a record by id
    ///
    /// # Errors
    ///
    /// Fails only on storage failure; an unknown id is `Ok(None)`.
    fn get(&self, game_id: &str) -> Result<Option<GameRecord>, StorageError>;

    /// Replace an existing record
    ///
    /// # Errors
    ///
    /// Fails with `Missing` if no record has this id, or on storage failure.
    fn update(&mut self, record: GameRecord) -> Result<(), StorageError>;

    /// All stored records, ordered by game id
    ///
    /// # Errors
    ///
    /// Fails on storage failure.
    fn list(&self) -> Result<Vec<GameRecord>, StorageError>;
}

/// Repository backed by a hash map
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: FxHashMap<String, GameRecord>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GameRepository for InMemoryRepository {
    fn create(&mut self, record: GameRecord) -> Result<(), StorageError> {
        if self.records.contains_key(&record.game_id) {
            return Err(StorageError::AlreadyExists(record.game_id));
        }
        self.records.insert(record.game_id.clone(), record);
        Ok(())
    }

    fn get(&self, game_id: &str) -> Result<Option<GameRecord>, StorageError> {
        Ok(self.records.get(game_id).cloned())
    }

    fn update(&mut self, record: GameRecord) -> Result<(), StorageError> {
        match self.records.get_mut(&record.game_id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StorageError::Missing(record.game_id)),
        }
    }

    fn list(&self) -> Result<Vec<GameRecord>, StorageError> {
        let mut records: Vec<GameRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| a.game_id.cmp(&b.game_id));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> GameRecord {
        GameRecord {
            game_id: id.to_string(),
            user_id: None,
            solution: "crane".to_string(),
            guesses: Vec::new(),
            solved: false,
            surrendered: false,
            hard_mode: false,
        }
    }

    #[test]
    fn create_then_get() {
        let mut repo = InMemoryRepository::new();
        repo.create(record("a")).unwrap();

        assert_eq!(repo.get("a").unwrap(), Some(record("a")));
        assert_eq!(repo.get("b").unwrap(), None);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn create_duplicate_fails() {
        let mut repo = InMemoryRepository::new();
        repo.create(record("a")).unwrap();

        assert!(matches!(
            repo.create(record("a")),
            Err(StorageError::AlreadyExists(id)) if id == "a"
        ));
    }

    #[test]
    fn update_replaces_record() {
        let mut repo = InMemoryRepository::new();
        repo.create(record("a")).unwrap();

        let mut updated = record("a");
        updated.guesses.push("slate".into());
        repo.update(updated.clone()).unwrap();

        assert_eq!(repo.get("a").unwrap(), Some(updated));
    }

    #[test]
    fn update_missing_fails() {
        let mut repo = InMemoryRepository::new();
        assert!(matches!(
            repo.update(record("a")),
            Err(StorageError::Missing(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn list_is_sorted() {
        let mut repo = InMemoryRepository::new();
        for id in ["c", "a", "b"] {
            repo.create(record(id)).unwrap();
        }

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.game_id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
