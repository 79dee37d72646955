//! Word Tiles
//!
//! A word-guessing tile game: six attempts to find a five-letter word, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tiles::core::Word;
//! use wordle_tiles::game::{Dictionary, GameSession, SubmitOutcome};
//!
//! let dictionary = Dictionary::new(["crane", "slate", "allow"]).unwrap();
//! let mut session = GameSession::with_target(&dictionary, Word::new("slate").unwrap()).unwrap();
//!
//! for ch in "crane".chars() {
//!     session.append_letter(ch);
//! }
//! if let SubmitOutcome::Accepted(accepted) = session.submit() {
//!     println!("{} scored {}", accepted.guess, accepted.result);
//! }
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
