//! Accumulated per-column knowledge
//!
//! One [`ColumnConstraint`] per column, indexed by column, plus the set of letters known to be
//! absent from the word entirely. The knowledge updater is the only writer.

use crate::core::{LetterSet, Word};

/// What is known about a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnConstraint {
    pub(super) home: Option<u8>,
    pub(super) priority: LetterSet,
    pub(super) never: LetterSet,
}

impl ColumnConstraint {
    /// The confirmed letter for this column, once known it never changes
    #[inline]
    #[must_use]
    pub const fn home(&self) -> Option<u8> {
        self.home
    }

    /// Letters known to be in the word and still possible in this column
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> LetterSet {
        self.priority
    }

    /// Letters ruled out for this column
    #[inline]
    #[must_use]
    pub const fn never(&self) -> LetterSet {
        self.never
    }
}

/// Knowledge for every column of the puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStore {
    pub(super) columns: Vec<ColumnConstraint>,
    pub(super) absent: LetterSet,
}

impl ConstraintStore {
    /// Empty knowledge for a word of `width` letters
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            columns: vec![ColumnConstraint::default(); width],
            absent: LetterSet::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnConstraint] {
        &self.columns
    }

    /// # Panics
    /// Panics if `column >= self.width()`
    #[must_use]
    pub fn home(&self, column: usize) -> Option<u8> {
        self.columns[column].home
    }

    /// # Panics
    /// Panics if `column >= self.width()`
    #[must_use]
    pub fn priority(&self, column: usize) -> LetterSet {
        self.columns[column].priority
    }

    /// # Panics
    /// Panics if `column >= self.width()`
    #[must_use]
    pub fn never(&self, column: usize) -> LetterSet {
        self.columns[column].never
    }

    /// Letters absent from the word entirely
    #[must_use]
    pub const fn global_absent(&self) -> LetterSet {
        self.absent
    }

    /// Whether `letter` is the confirmed letter of any column
    #[must_use]
    pub fn is_home_anywhere(&self, letter: u8) -> bool {
        self.columns.iter().any(|c| c.home == Some(letter))
    }

    /// Confirmed letters in column order, skipping unknown columns
    #[must_use]
    pub fn correct_letters(&self) -> Vec<u8> {
        self.columns.iter().filter_map(|c| c.home).collect()
    }

    /// Every column's priority letters flattened into one set
    ///
    /// A letter that is priority for several columns appears once; candidates only have to
    /// contain it once.
    #[must_use]
    pub fn all_priority(&self) -> LetterSet {
        self.columns
            .iter()
            .fold(LetterSet::new(), |acc, c| acc.union(c.priority))
    }

    /// The full alphabet minus globally absent letters
    #[must_use]
    pub fn allowed_alphabet(&self) -> LetterSet {
        LetterSet::full().difference(self.absent)
    }

    /// The word spelled by the confirmed letters, if every column is known
    #[must_use]
    pub fn solved_word(&self) -> Option<Word> {
        let letters: Option<Vec<u8>> = self.columns.iter().map(|c| c.home).collect();
        letters
            .and_then(|l| String::from_utf8(l).ok())
            .and_then(|s| Word::new(s).ok())
    }
}
