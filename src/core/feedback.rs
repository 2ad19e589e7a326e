//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the solution as:
//! - `Correct`: same letter at the same position (green)
//! - `Present`: letter occurs elsewhere in the solution (yellow)
//! - `Absent`: letter does not occur, or every occurrence is already claimed (gray)

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one state per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Classify `guess` against `solution`
    ///
    /// Repeated letters are credited at most as many times as they occur in the
    /// solution, with exact matches taking priority.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the unmatched pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    ///
    /// Both words must have the same length; the game layer checks this before
    /// scoring.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterState::*, Word};
    ///
    /// let solution = Word::new("allot").unwrap();
    /// let guess = Word::new("lulls").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// // The l at position 2 is exact; only one l is left for the other two
    /// assert_eq!(feedback.states(), &[Present, Absent, Correct, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len(), "guess and solution lengths differ");

        let mut result = vec![LetterState::Absent; guess.len()];
        let mut unmatched = solution.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                result[i] = LetterState::Correct;
                if let Some(count) = unmatched.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, consuming from the pool
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Positions classified as correct
    pub fn correct_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == LetterState::Correct)
            .map(|(i, _)| i)
    }

    /// Count the number of correct (green) letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    /// Count the number of present (yellow) letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            let ch = match state {
                LetterState::Correct => 'G',
                LetterState::Present => 'Y',
                LetterState::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
