//! Word list loading utilities
//!
//! Builds a `Dictionary` from a file or from the embedded list.

use crate::game::Dictionary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// Blank lines and lines starting with `#` are ignored; invalid words are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_tiles::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let dictionary = Dictionary::new(content.lines().filter(|line| !line.trim_start().starts_with('#')))
        .with_context(|| format!("Unusable word list {}", path.display()))?;

    log::info!(
        "Loaded {} words from {} ({} skipped)",
        dictionary.len(),
        path.display(),
        dictionary.skipped()
    );
    Ok(dictionary)
}

/// Dictionary built from the word list compiled into the binary
///
/// # Errors
///
/// Returns an error only if the embedded list holds no valid words.
///
/// # Examples
/// ```
/// use wordle_tiles::wordlists::loader::embedded_dictionary;
/// use wordle_tiles::wordlists::WORDS_COUNT;
///
/// let dictionary = embedded_dictionary().unwrap();
/// assert_eq!(dictionary.len(), WORDS_COUNT);
/// ```
pub fn embedded_dictionary() -> Result<Dictionary> {
    Dictionary::new(super::WORDS).context("Embedded word list is empty")
}
