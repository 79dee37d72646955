//! Per-letter keyboard status
//!
//! Tracks the best verdict seen for each letter across a session's guesses.

use super::verdict::{GuessResult, LetterVerdict};
use super::word::{Letter, Word};

/// Best verdict seen so far for every letter A–Z
///
/// Letters never guessed have no status. A recorded status only moves
/// upward: `Absent` → `Present` → `Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    letters: [Option<LetterVerdict>; 26],
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of a letter, `None` if it has not been guessed
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> Option<LetterVerdict> {
        self.letters[letter.index()]
    }

    /// Record a verdict for a letter, keeping whichever is stronger
    ///
    /// Returns `true` if the stored status changed.
    pub fn record(&mut self, letter: Letter, verdict: LetterVerdict) -> bool {
        let slot = &mut self.letters[letter.index()];
        match *slot {
            Some(current) if current >= verdict => false,
            _ => {
                *slot = Some(verdict);
                true
            }
        }
    }

    /// Record every letter of a scored guess
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::{KeyboardStatus, Letter, LetterVerdict, Word, evaluate};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let result = evaluate(&guess, &Word::new("allow").unwrap());
    ///
    /// let mut keyboard = KeyboardStatus::new();
    /// keyboard.record_guess(&guess, &result);
    ///
    /// // L is correct at one position even though another L was absent
    /// assert_eq!(keyboard.get(Letter::L), Some(LetterVerdict::Correct));
    /// assert_eq!(keyboard.get(Letter::Y), Some(LetterVerdict::Absent));
    /// assert_eq!(keyboard.get(Letter::Q), None);
    /// ```
    pub fn record_guess(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, verdict) in guess.letters().iter().zip(result.iter()) {
            self.record(letter, verdict);
        }
    }

    /// Letters that have a status, in alphabetical order
    pub fn known(&self) -> impl Iterator<Item = (Letter, LetterVerdict)> + '_ {
        Letter::ALL
            .iter()
            .filter_map(|&letter| self.get(letter).map(|verdict| (letter, verdict)))
    }
}
