//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or use the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines()))
}

/// Resolve a `--dictionary` argument
///
/// `"embedded"` selects the compiled-in list, anything else is a file path.
///
/// # Errors
///
/// Returns an I/O error if a path was given and cannot be read.
pub fn load(source: &str) -> io::Result<Dictionary> {
    match source {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let suffix: u64 = rand::rng().random();
        std::env::temp_dir().join(format!("wordle_engine_{name}_{suffix:x}.txt"))
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = temp_path("dict");
        fs::write(&path, "crane\n\nSLATE\n  irate  \nbad word\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("slate"));
        assert!(dictionary.contains("irate"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = temp_path("missing");
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn load_embedded_keyword() {
        let dictionary = load("embedded").unwrap();
        assert_eq!(dictionary.len(), super::super::WORDS_COUNT);
    }
}
