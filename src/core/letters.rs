//! Letter sets over the puzzle alphabet
//!
//! Every constraint the engine tracks is a set of lowercase ASCII letters, so sets are stored as a
//! 26-bit mask. Iteration is always in alphabetical order.

use std::fmt;

/// The full puzzle alphabet, in order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase(), "letters must be lowercase ASCII");
    1 << (letter - b'a')
}

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a set holding the whole alphabet
    #[must_use]
    pub const fn full() -> Self {
        Self(FULL_MASK)
    }

    /// Test if a letter is contained in this set
    ///
    /// Bytes outside `a..=z` are never members.
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & bit(letter) != 0
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let added = !self.contains(letter);
        self.0 |= bit(letter);
        added
    }

    /// Remove a letter, returning `true` if it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !bit(letter);
        present
    }

    /// Letters in either set
    #[inline]
    #[must_use]
    pub const fn union(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Letters in `self` but not in `rhs`
    #[inline]
    #[must_use]
    pub const fn difference(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every alphabet letter is present
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.iter().copied().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
