//! Accumulated knowledge about the secret word
//!
//! Facts only ever grow during a game: a resolved slot is never unset and no
//! letter is ever removed from a set.

use crate::core::{LetterSet, Mark, ScoreCode, WORD_LENGTH, Word};

/// Everything learned from the scores seen so far in one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts {
    /// Confirmed letter per slot
    pattern: [Option<u8>; WORD_LENGTH],
    /// Letters known to be in the word but not at that slot
    wrong_positions: [LetterSet; WORD_LENGTH],
    /// Letters confirmed present somewhere
    known: LetterSet,
    /// Letters confirmed absent
    failed: LetterSet,
}

impl Facts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn wrong_positions(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.wrong_positions
    }

    #[inline]
    #[must_use]
    pub const fn known(&self) -> LetterSet {
        self.known
    }

    #[inline]
    #[must_use]
    pub const fn failed(&self) -> LetterSet {
        self.failed
    }

    /// Number of slots with a confirmed letter
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.pattern.iter().flatten().count()
    }

    /// Letters that are confirmed at some slot
    #[must_use]
    pub fn pattern_letters(&self) -> LetterSet {
        self.pattern.iter().flatten().copied().collect()
    }

    /// Letters exploration has nothing left to learn about
    #[must_use]
    pub fn ignored_letters(&self) -> LetterSet {
        self.known.union(self.pattern_letters()).union(self.failed)
    }

    /// Render the pattern with `.` for unresolved slots, e.g. `w..d.`
    #[must_use]
    pub fn pattern_string(&self) -> String {
        self.pattern
            .iter()
            .map(|slot| slot.map_or('.', char::from))
            .collect()
    }

    /// Fold one guess and its score into the facts
    pub fn apply(&mut self, guess: &Word, score: ScoreCode) {
        for (i, mark) in score.marks().into_iter().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Absent => {
                    self.failed.insert(letter);
                }
                Mark::Misplaced => {
                    self.known.insert(letter);
                    self.wrong_positions[i].insert(letter);
                }
                Mark::Correct => {
                    self.pattern[i].get_or_insert(letter);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(facts: &mut Facts, guess: &str, score: &str) {
        let guess = Word::new(guess).unwrap();
        facts.apply(&guess, ScoreCode::parse(score).unwrap());
    }

    #[test]
    fn new_facts_are_empty() {
        let facts = Facts::new();
        assert_eq!(facts.resolved_count(), 0);
        assert!(facts.known().is_empty());
        assert!(facts.failed().is_empty());
        assert_eq!(facts.pattern_string(), ".....");
    }

    #[test]
    fn apply_sorts_marks_into_facts() {
        let mut facts = Facts::new();
        apply(&mut facts, "wrong", "21100");

        assert_eq!(facts.pattern_string(), "w....");
        assert_eq!(facts.known().to_string(), "or");
        assert_eq!(facts.failed().to_string(), "gn");
        assert!(facts.wrong_positions()[1].contains(b'r'));
        assert!(facts.wrong_positions()[2].contains(b'o'));
        assert!(facts.wrong_positions()[0].is_empty());
        assert_eq!(facts.ignored_letters().to_string(), "gnorw");
    }

    #[test]
    fn resolved_slot_is_never_overwritten() {
        let mut facts = Facts::new();
        apply(&mut facts, "words", "20000");
        apply(&mut facts, "solid", "20000");
        assert_eq!(facts.pattern()[0], Some(b'w'));
        assert_eq!(facts.resolved_count(), 1);
    }

    #[test]
    fn repeated_facts_are_idempotent() {
        let mut once = Facts::new();
        apply(&mut once, "wrong", "21100");
        let mut twice = once.clone();
        apply(&mut twice, "wrong", "21100");
        assert_eq!(once, twice);
    }
}
