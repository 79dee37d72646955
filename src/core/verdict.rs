//! Guess evaluation
//!
//! Scores a guess against the target word, one verdict per position:
//! - Correct: letter is in the target at this position
//! - Present: letter is in the target, at another position
//! - Absent: letter is not in the target (or every copy is already accounted for)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Per-position classification of a guessed letter
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Single-character code: G (correct), Y (present), - (absent)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterVerdict; WORD_LENGTH]);

impl GuessResult {
    /// Result for a guess that equals the target
    pub const WIN: Self = Self([LetterVerdict::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterVerdict> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for GuessResult {
    type Output = LetterVerdict;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

/// Raised when raw text handed to the evaluator breaks its contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    InvalidInput(String),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid evaluator input: {reason}"),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Score `guess` against `target`
///
/// Handles duplicate letters: each copy of a letter in the target can be
/// claimed by at most one guessed letter, and exact matches claim first.
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact position matches Correct and remove them from the pool
/// 3. Second pass: mark each remaining position Present if its letter is still in
///    the pool (consuming it), otherwise Absent
///
/// # Examples
/// ```
/// use wordle_tiles::core::{LetterVerdict::*, Word, evaluate};
///
/// let guess = Word::new("lolly").unwrap();
/// let target = Word::new("allow").unwrap();
///
/// let result = evaluate(&guess, &target);
/// assert_eq!(result.verdicts(), &[Present, Present, Correct, Absent, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessResult {
    let mut verdicts: [Option<LetterVerdict>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut remaining = target.letter_counts();

    for (i, (g, t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            verdicts[i] = Some(LetterVerdict::Correct);
            remaining[g.index()] -= 1;
        }
    }

    for (verdict, letter) in verdicts.iter_mut().zip(guess.letters()) {
        if verdict.is_some() {
            continue;
        }
        let count = &mut remaining[letter.index()];
        *verdict = if *count > 0 {
            *count -= 1;
            Some(LetterVerdict::Present)
        } else {
            Some(LetterVerdict::Absent)
        };
    }

    GuessResult(verdicts.map(|v| v.unwrap_or(LetterVerdict::Absent)))
}

/// Score raw text, validating it first
///
/// # Errors
/// Returns `EvaluateError::InvalidInput` if the two strings differ in length,
/// are not five characters long, or contain anything other than letters.
///
/// # Examples
/// ```
/// use wordle_tiles::core::evaluate_str;
///
/// assert!(evaluate_str("crane", "slate").is_ok());
/// assert!(evaluate_str("crane", "slates").is_err());
/// ```
pub fn evaluate_str(guess: &str, target: &str) -> Result<GuessResult, EvaluateError> {
    let guess_len = guess.chars().count();
    let target_len = target.chars().count();
    if guess_len != target_len {
        return Err(EvaluateError::InvalidInput(format!(
            "guess has {guess_len} letters but target has {target_len}"
        )));
    }

    let guess = Word::new(guess)
        .map_err(|e| EvaluateError::InvalidInput(format!("guess '{guess}': {e}")))?;
    let target = Word::new(target)
        .map_err(|e| EvaluateError::InvalidInput(format!("target '{target}': {e}")))?;

    Ok(evaluate(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::LetterVerdict::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, target: &str) -> [LetterVerdict; WORD_LENGTH] {
        *evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).verdicts()
    }

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["crane", "slate", "allow", "lolly", "speed"] {
            let w = Word::new(word).unwrap();
            assert_eq!(evaluate(&w, &w), GuessResult::WIN);
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; WORD_LENGTH]);
        assert_eq!(score("mouth", "crane"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn lolly_against_allow() {
        assert_eq!(
            score("lolly", "allow"),
            [Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_claims_letter_before_misplaced_copy() {
        // Target has one B at position 1; the guess's earlier B must not steal it
        assert_eq!(score("bbxyz", "abcde"), [Absent, Correct, Absent, Absent, Absent]);
        // Target has one B elsewhere: only the first guessed B is present
        assert_eq!(score("bbxyz", "acbde"), [Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn repeated_guess_letter_with_two_in_target() {
        // SPEED vs ERASE: both E's present, S present
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn mixed_correct_and_present_duplicates() {
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn crane_against_slate() {
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn result_helpers() {
        let result = evaluate(&Word::new("lolly").unwrap(), &Word::new("allow").unwrap());
        assert!(!result.is_win());
        assert_eq!(result.count(Correct), 1);
        assert_eq!(result.count(Present), 2);
        assert_eq!(result.count(Absent), 2);
        assert_eq!(result[2], Correct);
        assert_eq!(result.to_string(), "YYG--");
    }

    #[test]
    fn evaluate_str_accepts_any_case() {
        let result = evaluate_str("LoLlY", "allow").unwrap();
        assert_eq!(result.to_string(), "YYG--");
    }

    #[test]
    fn evaluate_str_rejects_mismatched_lengths() {
        assert!(matches!(
            evaluate_str("crane", "slates"),
            Err(EvaluateError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_str("cranes", "slates"),
            Err(EvaluateError::InvalidInput(_))
        ));
    }

    #[test]
    fn evaluate_str_rejects_non_letters() {
        assert!(matches!(
            evaluate_str("cr4ne", "slate"),
            Err(EvaluateError::InvalidInput(_))
        ));
    }
}
