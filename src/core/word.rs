//! Letters and five-letter words
//!
//! A `Word` is a validated, uppercase, five-letter sequence of `Letter`s.

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// One of the 26 letters A–Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Every letter in alphabetical order
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Parse a letter, ignoring case
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Self::from_index(usize::from(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Letter at alphabet position `index` (0 = A)
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Alphabet position (0 = A)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A five-letter word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input of any case is accepted and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::from_char(ch).ok_or(WordError::InvalidCharacters)?;
        }

        Ok(Self { letters })
    }

    /// Build a word directly from letters
    #[inline]
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// The word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    /// The letters of the word in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Count of each letter in the word, indexed by alphabet position
    ///
    /// Used by the evaluator to handle duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for letter in &self.letters {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
