//! Core scoring types
//!
//! Pure word and feedback types plus the letter-knowledge views derived from a
//! guess history. Nothing here performs I/O or holds game state.

mod feedback;
pub mod letters;
mod word;

pub use feedback::{Feedback, LetterState};
pub use letters::{
    AlphabetEntry, LetterStatus, alphabet_view, confirmed_position_letters, used_letters,
};
pub use word::{Word, WordError};
