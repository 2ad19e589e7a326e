//! JSON file storage
//!
//! One `<game_id>.json` file per game inside a directory. New games claim
//! their file with `create_new`; updates go to a uniquely named temporary file
//! that is then renamed over the target.

use super::repository::{GameRepository, StorageError};
use crate::game::GameRecord;
use rand::Rng;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Repository storing each record as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Open a repository in `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ids become file names, so only plain identifier characters are accepted.
    fn path_for(&self, game_id: &str) -> Option<PathBuf> {
        let valid = !game_id.is_empty()
            && game_id
                .bytes()
                .all(|c| c.is_ascii_alphanumeric() || c == b'-' || c == b'_');
        valid.then(|| self.dir.join(format!("{game_id}.json")))
    }

    fn write(path: &Path, record: &GameRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(record)?;
        let suffix: u64 = rand::rng().random();
        let tmp = path.with_extension(format!("json.{suffix:016x}.tmp"));
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<GameRecord, StorageError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl GameRepository for JsonFileRepository {
    fn create(&mut self, record: GameRecord) -> Result<(), StorageError> {
        let path = self
            .path_for(&record.game_id)
            .ok_or_else(|| StorageError::InvalidId(record.game_id.clone()))?;
        let json = serde_json::to_string_pretty(&record)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(record.game_id));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    fn get(&self, game_id: &str) -> Result<Option<GameRecord>, StorageError> {
        let Some(path) = self.path_for(game_id) else {
            return Ok(None);
        };
        match Self::read(&path) {
            Ok(record) => Ok(Some(record)),
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn update(&mut self, record: GameRecord) -> Result<(), StorageError> {
        let path = self
            .path_for(&record.game_id)
            .filter(|p| p.exists())
            .ok_or_else(|| StorageError::Missing(record.game_id.clone()))?;
        Self::write(&path, &record)
    }

    fn list(&self) -> Result<Vec<GameRecord>, StorageError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                records.push(Self::read(&path)?);
            }
        }
        records.sort_by(|a, b| a.game_id.cmp(&b.game_id));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn temp_repo() -> JsonFileRepository {
        let suffix: u64 = rand::rng().random();
        let dir = std::env::temp_dir().join(format!("wordle_engine_store_{suffix:x}"));
        JsonFileRepository::open(dir).unwrap()
    }

    fn record(id: &str) -> GameRecord {
        GameRecord {
            game_id: id.to_string(),
            user_id: Some("user-1".to_string()),
            solution: "crane".to_string(),
            guesses: vec!["slate".to_string()],
            solved: false,
            surrendered: false,
            hard_mode: true,
        }
    }

    #[test]
    fn create_get_update_list() {
        let mut repo = temp_repo();

        repo.create(record("b")).unwrap();
        repo.create(record("a")).unwrap();
        assert_eq!(repo.get("a").unwrap(), Some(record("a")));

        let mut updated = record("a");
        updated.surrendered = true;
        repo.update(updated.clone()).unwrap();
        assert_eq!(repo.get("a").unwrap(), Some(updated));

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.game_id).collect();
        assert_eq!(ids, vec!["a", "b"]);

        fs::remove_dir_all(repo.dir()).unwrap();
    }

    #[test]
    fn missing_and_duplicate() {
        let mut repo = temp_repo();

        assert_eq!(repo.get("nope").unwrap(), None);
        assert!(matches!(
            repo.update(record("nope")),
            Err(StorageError::Missing(_))
        ));

        repo.create(record("a")).unwrap();
        assert!(matches!(
            repo.create(record("a")),
            Err(StorageError::AlreadyExists(_))
        ));

        fs::remove_dir_all(repo.dir()).unwrap();
    }

    #[test]
    fn create_never_replaces_an_existing_file() {
        let mut repo = temp_repo();
        let path = repo.dir().join("a.json");
        fs::write(&path, "{}").unwrap();

        assert!(matches!(
            repo.create(record("a")),
            Err(StorageError::AlreadyExists(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        fs::remove_dir_all(repo.dir()).unwrap();
    }

    #[test]
    fn concurrent_creates_of_one_id_have_one_winner() {
        let repo = temp_repo();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let mut repo = repo.clone();
                thread::spawn(move || repo.create(record("race")).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(repo.get("race").unwrap(), Some(record("race")));

        fs::remove_dir_all(repo.dir()).unwrap();
    }

    #[test]
    fn updates_leave_no_temporary_files() {
        let mut repo = temp_repo();
        repo.create(record("a")).unwrap();

        let mut updated = record("a");
        for guess in ["trace", "irate"] {
            updated.guesses.push(guess.to_string());
            repo.update(updated.clone()).unwrap();
        }

        let names: Vec<String> = fs::read_dir(repo.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json"]);
        assert_eq!(repo.get("a").unwrap(), Some(updated));

        fs::remove_dir_all(repo.dir()).unwrap();
    }

    #[test]
    fn path_like_ids_are_not_found() {
        let mut repo = temp_repo();

        assert_eq!(repo.get("../etc/passwd").unwrap(), None);
        assert_eq!(repo.get("").unwrap(), None);
        assert!(matches!(
            repo.create(record("../x")),
            Err(StorageError::InvalidId(_))
        ));

        fs::remove_dir_all(repo.dir()).unwrap();
    }
}
