//! Score codes: the per-letter feedback for one guess
//!
//! A score encodes five marks using base-3 encoding:
//! - 0 = absent (letter not in word)
//! - 1 = misplaced (letter in word, wrong position)
//! - 2 = correct (letter in correct position)
//!
//! The score is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Misplaced,
    Correct,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Misplaced,
            _ => Self::Correct,
        }
    }
}

/// Error returned when a score string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    #[error("score must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid score symbol {0:?}, expected 0, 1 or 2")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreCode(u8);

impl ScoreCode {
    /// All correct
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a score from five marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Get the raw value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// The five marks in position order
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Score `guess` against `secret` using letter membership
    ///
    /// A letter that is not in its exact position is marked misplaced whenever it
    /// occurs anywhere in the secret. Repeated guess letters are not limited by how
    /// many times the letter appears in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_sweep::core::{ScoreCode, Word};
    ///
    /// let guess = Word::new("wrong").unwrap();
    /// let secret = Word::new("words").unwrap();
    /// assert_eq!(ScoreCode::against(&guess, &secret).to_string(), "21100");
    /// ```
    #[must_use]
    pub fn against(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == secret.char_at(i) {
                Mark::Correct
            } else if secret.has_letter(letter) {
                Mark::Misplaced
            } else {
                Mark::Absent
            };
        }
        Self::from_marks(marks)
    }

    /// Parse a score from digits like "21100"
    ///
    /// # Errors
    /// Returns `ScoreParseError` if the string is not five symbols from `0`, `1`, `2`.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(ScoreParseError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = match symbol {
                '0' => Mark::Absent,
                '1' => Mark::Misplaced,
                '2' => Mark::Correct,
                other => return Err(ScoreParseError::InvalidSymbol(other)),
            };
        }
        Ok(Self::from_marks(marks))
    }

    /// Convert to an emoji string like "🟩🟨⬜⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Misplaced => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for ScoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks()
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.digit()))
    }
}

impl std::str::FromStr for ScoreCode {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        ScoreCode::against(&guess, &secret).to_string()
    }

    #[test]
    fn perfect_constant() {
        assert_eq!(ScoreCode::PERFECT.value(), 242);
        assert!(ScoreCode::PERFECT.is_perfect());
        assert_eq!(ScoreCode::PERFECT.marks(), [Mark::Correct; WORD_LENGTH]);
        assert_eq!(ScoreCode::parse("22222").unwrap(), ScoreCode::PERFECT);
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("abcde", "fghij"), "00000");
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for word in ["words", "wrong", "solid", "abide", "eerie"] {
            let w = Word::new(word).unwrap();
            assert!(ScoreCode::against(&w, &w).is_perfect());
        }
    }

    #[test]
    fn help_text_example() {
        assert_eq!(score("wrong", "words"), "21100");
    }

    #[test]
    fn repeated_letters_use_membership() {
        // Count-exhaustion scoring would give 00012 here.
        assert_eq!(score("eerie", "abide"), "11012");
        // ROBOT vs FLOOR: both O's are marked even though one is already correct.
        assert_eq!(score("robot", "floor"), "11020");
    }

    #[test]
    fn marks_round_trip_through_value() {
        let marks = [
            Mark::Correct,
            Mark::Misplaced,
            Mark::Misplaced,
            Mark::Absent,
            Mark::Absent,
        ];
        let code = ScoreCode::from_marks(marks);
        // 2 + 1×3 + 1×9 = 14
        assert_eq!(code.value(), 14);
        assert_eq!(code.marks(), marks);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(ScoreCode::parse("2110"), Err(ScoreParseError::InvalidLength(4)));
        assert_eq!(ScoreCode::parse("211000"), Err(ScoreParseError::InvalidLength(6)));
        assert_eq!(ScoreCode::parse("21130"), Err(ScoreParseError::InvalidSymbol('3')));
        assert_eq!(ScoreCode::parse("GYXXG"), Err(ScoreParseError::InvalidSymbol('G')));
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(ScoreCode::parse("21100").unwrap().to_emoji(), "🟩🟨🟨⬜⬜");
    }
}
