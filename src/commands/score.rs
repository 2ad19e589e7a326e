//! Score a single guess against a given solution
//!
//! Stateless: no game, no dictionary check.

use crate::core::{Feedback, Word};
use serde::Serialize;

/// Result of scoring one guess
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub solution: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(solution: &str, guess: &str) -> Result<ScoreResult, String> {
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if solution.len() != guess.len() {
        return Err(format!(
            "Guess has {} letters but the solution has {}",
            guess.len(),
            solution.len()
        ));
    }

    let feedback = Feedback::calculate(&guess, &solution);
    Ok(ScoreResult {
        solution: solution.text().to_string(),
        guess: guess.text().to_string(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_normalizes_case() {
        let result = score_words("CRANE", "Trace").unwrap();
        assert_eq!(result.solution, "crane");
        assert_eq!(result.guess, "trace");
        assert_eq!(result.feedback.to_string(), "-GGYG");
    }

    #[test]
    fn score_words_length_mismatch() {
        let err = score_words("crane", "able").err().unwrap();
        assert_eq!(err, "Guess has 4 letters but the solution has 5");
    }

    #[test]
    fn score_words_invalid_word() {
        assert!(score_words("crane", "cr4ne").is_err());
        assert!(score_words("", "crane").is_err());
    }
}
