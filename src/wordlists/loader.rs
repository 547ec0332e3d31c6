//! Word list loading utilities
//!
//! One word per line. Blank lines are skipped; anything that is not a five-letter
//! word, or repeats an earlier word, is skipped with a warning.

use crate::core::Word;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse a word list from text, keeping the first occurrence of each word in file order
///
/// # Examples
/// ```
/// use wordle_sweep::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("crane\n\nSLATE\ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed)
                .inspect_err(|e| log::warn!("skipping word {trimmed:?} on line {}: {e}", index + 1))
                .ok()?;
            if !seen.insert(word) {
                log::warn!("skipping repeated word {word} on line {}", index + 1);
                return None;
            }
            Some(word)
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sweep::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        log::warn!("word list {} has no usable words", path.display());
    } else {
        log::info!("loaded {} words from {}", words.len(), path.display());
    }
    Ok(words)
}
