//! Wordle Engine
//!
//! Rules engine for a Wordle-style word game with configurable word length,
//! hard mode and persistent games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, LetterState, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let solution = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &solution);
//! assert_eq!(feedback.states()[1], LetterState::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Valid words, grouped by length
pub mod dictionary;

// Game state machine, projection and persistence records
pub mod game;

// Stored games behind a repository
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
