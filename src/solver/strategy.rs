//! Guess selection strategies
//!
//! Defines the Scorer trait and the two letter-frequency heuristics.

use crate::core::{LetterSet, WORD_LENGTH, Word};

/// A strategy for choosing the next guess from a candidate pool
pub trait Scorer {
    /// Select the best guess from the candidates
    ///
    /// Returns `None` only if `candidates` is empty. Ties go to the earliest
    /// maximal candidate.
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;
}

/// How often each letter appears at each position across a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[u32; 26]; WORD_LENGTH],
}

impl FrequencyTable {
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut counts = [[0; 26]; WORD_LENGTH];
        for word in words {
            for (position, &c) in word.chars().iter().enumerate() {
                counts[position][usize::from(c - b'a')] += 1;
            }
        }
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][usize::from(letter - b'a')]
    }

    /// Zero out the given letters at every position
    pub fn clear_letters(&mut self, letters: LetterSet) {
        for letter in letters.iter() {
            for row in &mut self.counts {
                row[usize::from(letter - b'a')] = 0;
            }
        }
    }
}

/// First candidate with the highest score
fn first_max_by_score<'a>(
    candidates: &'a [Word],
    score: impl Fn(&Word) -> u32,
) -> Option<&'a Word> {
    let mut best: Option<(&Word, u32)> = None;
    for word in candidates {
        let s = score(word);
        if best.is_none_or(|(_, top)| s > top) {
            best = Some((word, s));
        }
    }
    best.map(|(word, _)| word)
}

/// Exploitation: favour words whose letters sit where the pool's letters usually sit
///
/// Pure function of the candidate pool, so it can be memoised by content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExploitScorer;

impl ExploitScorer {
    /// Positional frequency score of a word
    #[must_use]
    pub fn score(word: &Word, table: &FrequencyTable) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &c)| table.get(i, c))
            .sum()
    }
}

impl Scorer for ExploitScorer {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        let table = FrequencyTable::build(candidates);
        first_max_by_score(candidates, |word| Self::score(word, &table))
    }
}

/// Exploration: favour words that cover many letters nothing is known about yet
///
/// Letters in `ignore` contribute nothing, and a repeated letter has its
/// contribution divided by how often it repeats in the word.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExploreScorer {
    ignore: LetterSet,
}

impl ExploreScorer {
    #[must_use]
    pub const fn new(ignore: LetterSet) -> Self {
        Self { ignore }
    }

    #[must_use]
    pub const fn ignore(&self) -> LetterSet {
        self.ignore
    }

    /// Coverage score of a word against a table with ignored letters already cleared
    #[must_use]
    pub fn score(word: &Word, table: &FrequencyTable) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &c)| table.get(i, c) / word.count_of(c) as u32)
            .sum()
    }
}

impl Scorer for ExploreScorer {
    fn select_guess<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        let mut table = FrequencyTable::build(candidates);
        table.clear_letters(self.ignore);
        first_max_by_score(candidates, |word| Self::score(word, &table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn frequency_table_counts_per_position() {
        let pool = words(&["words", "wrong", "solid", "abide"]);
        let table = FrequencyTable::build(&pool);
        assert_eq!(table.get(0, b'w'), 2);
        assert_eq!(table.get(0, b's'), 1);
        assert_eq!(table.get(1, b'o'), 2);
        assert_eq!(table.get(4, b'z'), 0);
    }

    #[test]
    fn exploit_scores_positional_matches() {
        let pool = words(&["words", "wrong", "solid", "abide"]);
        let table = FrequencyTable::build(&pool);
        // w(2) o(2) r(1) d(2) s(1)
        assert_eq!(ExploitScorer::score(&pool[0], &table), 8);
        // w(2) r(1) o(1) n(1) g(1)
        assert_eq!(ExploitScorer::score(&pool[1], &table), 6);
        assert_eq!(ExploitScorer.select_guess(&pool), Some(&pool[0]));
    }

    #[test]
    fn exploit_tie_goes_to_first() {
        let pool = words(&["abcde", "fghij", "klmno"]);
        assert_eq!(ExploitScorer.select_guess(&pool), Some(&pool[0]));
    }

    #[test]
    fn empty_pool_yields_nothing() {
        assert_eq!(ExploitScorer.select_guess(&[]), None);
        assert_eq!(ExploreScorer::default().select_guess(&[]), None);
    }

    #[test]
    fn explore_penalises_repeated_letters() {
        let pool = words(&["eerie", "abide"]);
        let mut table = FrequencyTable::build(&pool);
        table.clear_letters(LetterSet::EMPTY);
        // eerie: e(1)/3 + e(1)/3 + r(1)/1 + i(1)/1 + e(2)/3 = 0 + 0 + 1 + 1 + 0
        assert_eq!(ExploreScorer::score(&pool[0], &table), 2);
        // abide: 1 + 1 + 1 + 1 + 2
        assert_eq!(ExploreScorer::score(&pool[1], &table), 6);
        assert_eq!(ExploreScorer::default().select_guess(&pool), Some(&pool[1]));
    }

    #[test]
    fn explore_ignores_known_letters() {
        let pool = words(&["words", "sword", "lumpy"]);
        let plain = ExploreScorer::default();
        assert_eq!(plain.select_guess(&pool).map(Word::text), Some("words"));

        let ignore: LetterSet = b"wordsy".iter().copied().collect();
        let scorer = ExploreScorer::new(ignore);
        assert_eq!(scorer.ignore(), ignore);
        assert_eq!(scorer.select_guess(&pool).map(Word::text), Some("lumpy"));
    }
}
