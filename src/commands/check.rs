//! Check one guess against one target

use crate::core::{EvaluateError, GuessResult, Word, evaluate_str};

/// Result of checking a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Score `guess` against `target` from raw text
///
/// # Errors
///
/// Returns `EvaluateError::InvalidInput` if either word is malformed or the
/// lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, EvaluateError> {
    let result = evaluate_str(guess, target)?;

    // Both parse: evaluate_str has already validated them
    let guess = Word::new(guess).map_err(|e| EvaluateError::InvalidInput(e.to_string()))?;
    let target = Word::new(target).map_err(|e| EvaluateError::InvalidInput(e.to_string()))?;

    Ok(CheckResult {
        guess,
        target,
        result,
    })
}
