//! Core domain types for Wordle
//!
//! Words, letter sets and score codes. Pure value types with no I/O.

mod letters;
mod score;
mod word;

pub use letters::LetterSet;
pub use score::{Mark, ScoreCode, ScoreParseError};
pub use word::{WORD_LENGTH, Word, WordError};
