//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and deterministic.

mod keyboard;
mod verdict;
mod word;

pub use keyboard::KeyboardStatus;
pub use verdict::{EvaluateError, GuessResult, LetterVerdict, evaluate, evaluate_str};
pub use word::{Letter, WORD_LENGTH, Word, WordError};
