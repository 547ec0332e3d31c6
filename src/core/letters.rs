//! Compact sets of letters
//!
//! One bit per letter `a..=z`. Used for known, failed and wrong-position letters.

use std::fmt;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{}", char::from(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'w'));
        assert!(!set.insert(b'w'));
        assert_eq!(set.len(), 1);
        assert!(set.contains(b'w'));
        assert!(!set.contains(b'o'));
    }

    #[test]
    fn set_algebra() {
        let a: LetterSet = b"word".iter().copied().collect();
        let b: LetterSet = b"ng".iter().copied().collect();
        let c: LetterSet = b"or".iter().copied().collect();

        assert!(a.is_disjoint(b));
        assert!(!a.is_disjoint(c));
        assert!(c.is_subset(a));
        assert!(!b.is_subset(a));
        assert_eq!(a.union(b).len(), 6);
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.to_string(), "aberz");
        assert!(LetterSet::default().is_empty());
    }
}
