//! Formatting utilities for terminal output

use crate::core::{AlphabetEntry, Feedback, LetterState, LetterStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile like " A "
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    let text = text.as_str();
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| letter_tile(letter, state).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an unplayed row of `letter_count` empty tiles
#[must_use]
pub fn empty_row(letter_count: usize) -> String {
    vec![" · ".bright_black().to_string(); letter_count].join(" ")
}

/// Render the letter bank on one line
///
/// Unused letters are plain, absent letters dimmed, present letters yellow and
/// letters confirmed in position green.
#[must_use]
pub fn letter_bank(entries: &[AlphabetEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let letter = entry.letter.to_ascii_uppercase().to_string();
            let letter = letter.as_str();
            match entry.status {
                LetterStatus::Unused => letter.normal(),
                LetterStatus::Absent => letter.bright_black().strikethrough(),
                LetterStatus::Present if entry.in_position => letter.green().bold(),
                LetterStatus::Present => letter.yellow().bold(),
            }
            .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text letter bank marker: `+` confirmed in position, `*` present,
/// `-` absent, `.` unused
#[must_use]
pub fn letter_bank_plain(entries: &[AlphabetEntry]) -> String {
    entries
        .iter()
        .map(|entry| match entry.status {
            LetterStatus::Unused => '.',
            LetterStatus::Absent => '-',
            LetterStatus::Present if entry.in_position => '+',
            LetterStatus::Present => '*',
        })
        .collect()
}

/// Letter bank for the current terminal: coloured, or plain markers when
/// colours are off
#[must_use]
pub fn letter_bank_line(entries: &[AlphabetEntry]) -> String {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        letter_bank(entries)
    } else {
        let letters: String = entries.iter().map(|e| e.letter.to_ascii_uppercase()).collect();
        format!("{letters}\n  {}", letter_bank_plain(entries))
    }
}
