//! Word lists for Wordle solving

pub mod loader;

pub use loader::{load_from_file, words_from_lines};

/// Word list used when none is given
pub const DEFAULT_WORDLIST: &str = "words.txt";
