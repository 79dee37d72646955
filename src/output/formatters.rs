//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardStatus, Letter, LetterVerdict, Word};
use crate::game::{GameSession, GameState, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// Emoji square for a verdict
#[must_use]
pub const fn verdict_emoji(verdict: LetterVerdict) -> char {
    match verdict {
        LetterVerdict::Correct => '🟩',
        LetterVerdict::Present => '🟨',
        LetterVerdict::Absent => '⬜',
    }
}

/// Format a result as an emoji string
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.iter().map(verdict_emoji).collect()
}

/// Colour one letter by its verdict
#[must_use]
pub fn colored_letter(letter: Letter, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.iter())
        .map(|(&letter, verdict)| colored_letter(letter, Some(verdict)).to_string())
        .collect()
}

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// The on-screen keyboard coloured by status, one line per row
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .filter_map(Letter::from_char)
                .map(|letter| colored_letter(letter, keyboard.get(letter)).to_string())
                .collect()
        })
        .collect()
}

/// Shareable summary: header line plus one emoji row per guess
///
/// # Examples
/// ```
/// use wordle_tiles::core::Word;
/// use wordle_tiles::game::{Dictionary, GameSession};
/// use wordle_tiles::output::formatters::share_grid;
///
/// let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
/// let mut session = GameSession::with_target(&dictionary, Word::new("slate").unwrap()).unwrap();
/// "slate".chars().for_each(|c| { session.append_letter(c); });
/// session.submit();
///
/// assert_eq!(share_grid(&session), "1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(session: &GameSession<'_>) -> String {
    let score = match session.state() {
        GameState::Won => session.history().len().to_string(),
        GameState::Lost | GameState::Playing => "X".to_string(),
    };

    let mut lines = vec![format!("{score}/{MAX_ATTEMPTS}")];
    lines.extend(
        session
            .history()
            .iter()
            .map(|(_, result)| result_to_emoji(result)),
    );
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
