//! Game session state machine
//!
//! A session owns one target word and moves from `Playing` to `Won` or `Lost`.
//! It is changed only by `append_letter`, `remove_letter` and `submit`; routine
//! input rejections come back as outcome values and leave the session untouched.

use super::dictionary::Dictionary;
use super::picker::TargetPicker;
use crate::core::{GuessResult, KeyboardStatus, Letter, WORD_LENGTH, Word, evaluate};
use std::fmt;

/// Number of guesses allowed per session
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of editing the input buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the buffer changed
    pub accepted: bool,
    /// Buffer contents after the edit
    pub buffer: String,
}

/// Why a submission was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game is over or the buffer is not full
    NotReady,
    /// The buffered word is not in the dictionary
    NotInDictionary,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "Not enough letters"),
            Self::NotInDictionary => write!(f, "Not in word list"),
        }
    }
}

/// Everything a front end needs to draw an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedGuess {
    pub guess: Word,
    pub result: GuessResult,
    pub keyboard: KeyboardStatus,
    pub state: GameState,
    /// Row (0-based) the guess was written to
    pub row_index: usize,
    /// The target, revealed once the game is over
    pub revealed_target: Option<Word>,
}

/// Outcome of `GameSession::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Accepted(AcceptedGuess),
}

/// Error type for session construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    TargetNotInDictionary(Word),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotInDictionary(word) => {
                write!(f, "Target word {word} is not in the dictionary")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One game: target, submitted rows, input buffer and keyboard status
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    history: Vec<(Word, GuessResult)>,
    buffer: Vec<Letter>,
    keyboard: KeyboardStatus,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a session with a target sampled from the dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::game::{Dictionary, FixedPicker, GameSession, GameState};
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
    /// let session = GameSession::new(&dictionary, &mut FixedPicker(1));
    /// assert_eq!(session.state(), GameState::Playing);
    /// assert_eq!(session.current_row(), 0);
    /// ```
    pub fn new(dictionary: &'a Dictionary, picker: &mut impl TargetPicker) -> Self {
        let index = picker.pick_index(dictionary.len());
        let target = dictionary.words()[index].clone();
        log::info!("New session started ({} words in dictionary)", dictionary.len());
        log::debug!("Session target: {target}");
        Self::start(dictionary, target)
    }

    /// Start a session with a chosen target
    ///
    /// # Errors
    /// Returns `SessionError::TargetNotInDictionary` if the target is not an accepted word.
    pub fn with_target(dictionary: &'a Dictionary, target: Word) -> Result<Self, SessionError> {
        if !dictionary.contains(&target) {
            return Err(SessionError::TargetNotInDictionary(target));
        }
        Ok(Self::start(dictionary, target))
    }

    fn start(dictionary: &'a Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: Vec::with_capacity(WORD_LENGTH),
            keyboard: KeyboardStatus::new(),
            state: GameState::Playing,
        }
    }

    /// Add a letter to the input buffer
    ///
    /// Ignored (not accepted) when the game is over, the buffer is full, or
    /// `ch` is not a letter. Letters are stored uppercase.
    pub fn append_letter(&mut self, ch: char) -> EditOutcome {
        let accepted = match Letter::from_char(ch) {
            Some(letter) if self.state == GameState::Playing && self.buffer.len() < WORD_LENGTH => {
                self.buffer.push(letter);
                true
            }
            _ => false,
        };
        self.edit_outcome(accepted)
    }

    /// Remove the last letter from the input buffer
    ///
    /// Ignored when the game is over or the buffer is empty.
    pub fn remove_letter(&mut self) -> EditOutcome {
        let accepted = self.state == GameState::Playing && self.buffer.pop().is_some();
        self.edit_outcome(accepted)
    }

    fn edit_outcome(&self, accepted: bool) -> EditOutcome {
        EditOutcome {
            accepted,
            buffer: self.buffer(),
        }
    }

    /// Submit the buffered word
    ///
    /// Requires a full buffer while the game is in progress. A word outside
    /// the dictionary is rejected and the buffer is left for the player to fix.
    /// An accepted guess is scored, recorded on the keyboard, and clears the
    /// buffer; the game is won if it matches the target and lost if it used
    /// the last attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::Word;
    /// use wordle_tiles::game::{Dictionary, GameSession, GameState, SubmitOutcome};
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
    /// let mut session = GameSession::with_target(&dictionary, Word::new("slate").unwrap()).unwrap();
    ///
    /// "slate".chars().for_each(|c| { session.append_letter(c); });
    /// match session.submit() {
    ///     SubmitOutcome::Accepted(accepted) => {
    ///         assert!(accepted.result.is_win());
    ///         assert_eq!(accepted.state, GameState::Won);
    ///     }
    ///     SubmitOutcome::Rejected(reason) => panic!("rejected: {reason}"),
    /// }
    /// ```
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state != GameState::Playing || self.buffer.len() != WORD_LENGTH {
            return SubmitOutcome::Rejected(Rejection::NotReady);
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        letters.copy_from_slice(&self.buffer);
        let guess = Word::from_letters(letters);

        if !self.dictionary.contains(&guess) {
            log::debug!("Rejected {guess}: not in dictionary");
            return SubmitOutcome::Rejected(Rejection::NotInDictionary);
        }

        let result = evaluate(&guess, &self.target);
        let row_index = self.history.len();
        self.keyboard.record_guess(&guess, &result);
        self.history.push((guess.clone(), result));
        self.buffer.clear();

        self.state = if guess == self.target {
            GameState::Won
        } else if self.history.len() == MAX_ATTEMPTS {
            GameState::Lost
        } else {
            GameState::Playing
        };

        log::debug!("Row {row_index}: {guess} scored {result}");
        if self.state.is_terminal() {
            log::info!(
                "Session over: {:?} after {} guesses (target {})",
                self.state,
                self.history.len(),
                self.target
            );
        }

        SubmitOutcome::Accepted(AcceptedGuess {
            guess,
            result,
            keyboard: self.keyboard,
            state: self.state,
            row_index,
            revealed_target: self.revealed_target().cloned(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn buffer(&self) -> String {
        self.buffer.iter().map(|l| l.as_char()).collect()
    }

    /// Submitted guesses and their results, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, GuessResult)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Index of the row being typed into (equals the number of submitted guesses)
    #[inline]
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The target, only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}
