//! Candidate filtering
//!
//! Narrows a candidate list to the words consistent with the accumulated facts.

use super::Facts;
use crate::core::Word;

/// Check a single word against the facts
///
/// With `relaxed` set, the positive pattern and the known-letter coverage are not
/// required; wrong positions and failed letters always are.
#[must_use]
pub fn is_consistent(word: &Word, facts: &Facts, relaxed: bool) -> bool {
    let chars = word.chars();

    if !relaxed
        && facts
            .pattern()
            .iter()
            .zip(chars)
            .any(|(slot, &c)| slot.is_some_and(|want| want != c))
    {
        return false;
    }

    if facts
        .wrong_positions()
        .iter()
        .zip(chars)
        .any(|(wrong, &c)| wrong.contains(c))
    {
        return false;
    }

    if !relaxed && !facts.known().iter().all(|c| word.has_letter(c)) {
        return false;
    }

    !chars.iter().any(|&c| facts.failed().contains(c))
}

/// Keep the candidates consistent with the facts, in their original order
///
/// # Examples
/// ```
/// use wordle_sweep::core::{ScoreCode, Word};
/// use wordle_sweep::solver::{Facts, filter_candidates};
///
/// let words: Vec<Word> = ["words", "wrong", "solid", "abide"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut facts = Facts::new();
/// facts.apply(&words[1], ScoreCode::parse("21100").unwrap());
///
/// let remaining = filter_candidates(&words, &facts, false);
/// assert_eq!(remaining, vec![words[0]]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], facts: &Facts, relaxed: bool) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| is_consistent(word, facts, relaxed))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreCode;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn facts_from(guess: &str, score: &str) -> Facts {
        let mut facts = Facts::new();
        facts.apply(&Word::new(guess).unwrap(), ScoreCode::parse(score).unwrap());
        facts
    }

    #[test]
    fn empty_facts_keep_everything() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        assert_eq!(filter_candidates(&list, &Facts::new(), false), list);
        assert_eq!(filter_candidates(&list, &Facts::new(), true), list);
    }

    #[test]
    fn positive_pattern_requires_letter_at_slot() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        let facts = facts_from("wxxxx", "20000");
        assert_eq!(filter_candidates(&list, &facts, false), words(&["words", "wrong"]));
    }

    #[test]
    fn wrong_position_excludes_letter_at_slot() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        // 'o' present but not at slot 2; 'wrong' has o at slot 2
        let facts = facts_from("xxoxx", "00100");
        let kept = filter_candidates(&list, &facts, false);
        assert_eq!(kept, words(&["words", "solid"]));
    }

    #[test]
    fn coverage_requires_known_letters() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        let facts = facts_from("dxxxx", "10000");
        // x is failed, d known: words, solid, abide contain d and no x
        assert_eq!(
            filter_candidates(&list, &facts, false),
            words(&["words", "solid", "abide"])
        );
    }

    #[test]
    fn failed_letters_exclude_anywhere() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        let facts = facts_from("gzzzz", "00000");
        assert_eq!(
            filter_candidates(&list, &facts, false),
            words(&["words", "solid", "abide"])
        );
    }

    #[test]
    fn relaxed_skips_positive_and_coverage_only() {
        let list = words(&["words", "wrong", "solid", "abide"]);
        // w correct at 0, o misplaced at 2 ... n, g failed
        let facts = facts_from("wrong", "21100");

        // strict: must start with w, contain o and r, not o at 2, not r at 1, no n/g
        assert_eq!(filter_candidates(&list, &facts, false), words(&["words"]));
        // relaxed: only wrong-position and failed letters apply
        assert_eq!(
            filter_candidates(&list, &facts, true),
            words(&["words", "solid", "abide"])
        );
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let list = words(&["words", "wrong", "solid", "abide", "sword", "dross"]);
        let facts = facts_from("sorry", "11010");
        let once = filter_candidates(&list, &facts, false);
        let twice = filter_candidates(&once, &facts, false);
        assert_eq!(once, twice);
    }
}
