//! Letter knowledge accumulated across guesses
//!
//! Aggregate views over a guess history used to render a keyboard or letter
//! bank. None of these reveal anything about letters the player has not tried.

use super::Word;
use serde::{Deserialize, Serialize};

/// Status of an alphabet letter in the letter bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Never guessed
    Unused,
    /// Guessed and somewhere in the solution
    Present,
    /// Guessed and nowhere in the solution
    Absent,
}

/// One letter of the letter bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetEntry {
    pub letter: char,
    pub status: LetterStatus,
    /// Guessed in its exact position at least once
    pub in_position: bool,
}

fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

fn collect_letters(seen: &[bool; 26]) -> Vec<char> {
    (b'a'..=b'z')
        .filter(|&c| seen[letter_index(c)])
        .map(char::from)
        .collect()
}

/// All letters appearing in any guess, alphabetically ordered
#[must_use]
pub fn used_letters(guesses: &[Word]) -> Vec<char> {
    let mut seen = [false; 26];
    for guess in guesses {
        for &c in guess.chars() {
            seen[letter_index(c)] = true;
        }
    }
    collect_letters(&seen)
}

/// Letters that matched the solution at their exact position in any guess
///
/// Guesses of a different length than the solution only contribute the
/// overlapping positions.
#[must_use]
pub fn confirmed_position_letters(guesses: &[Word], solution: &Word) -> Vec<char> {
    let mut seen = [false; 26];
    for guess in guesses {
        for (&g, &s) in guess.chars().iter().zip(solution.chars()) {
            if g == s {
                seen[letter_index(g)] = true;
            }
        }
    }
    collect_letters(&seen)
}

/// Status of all 26 letters given the guesses so far
///
/// A letter is `Present` when it was guessed and occurs anywhere in the
/// solution, regardless of the position it was guessed in.
#[must_use]
pub fn alphabet_view(guesses: &[Word], solution: &Word) -> Vec<AlphabetEntry> {
    let used = used_letters(guesses);
    let confirmed = confirmed_position_letters(guesses, solution);

    ('a'..='z')
        .map(|letter| {
            let status = if !used.contains(&letter) {
                LetterStatus::Unused
            } else if solution.has_letter(letter as u8) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
            AlphabetEntry {
                letter,
                status,
                in_position: confirmed.contains(&letter),
            }
        })
        .collect()
}
