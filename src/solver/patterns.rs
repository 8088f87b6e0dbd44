//! Per-column match patterns derived from the constraint store
//!
//! Two patterns are built each turn. The exclusion pattern rejects letters known not to fit a
//! column. The inclusion pattern pins confirmed columns and otherwise restricts each column to
//! the allowed alphabet with priority letters first. Both render in a regular-expression-like
//! form for logging.

use super::constraints::ConstraintStore;
use crate::core::{LetterSet, Word};
use std::fmt;

/// What a single column accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMatch {
    /// Any letter
    Any,
    /// Exactly this letter
    Exactly(u8),
    /// Any letter of the set
    OneOf(LetterSet),
    /// Any letter outside the set
    NoneOf(LetterSet),
}

impl SlotMatch {
    #[must_use]
    pub const fn matches(self, letter: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => letter == expected,
            Self::OneOf(set) => set.contains(letter),
            Self::NoneOf(set) => !set.contains(letter),
        }
    }
}

impl fmt::Display for SlotMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "\\w"),
            Self::Exactly(letter) => write!(f, "{}", *letter as char),
            Self::OneOf(set) => write!(f, "(?:[{set}])"),
            Self::NoneOf(set) => write!(f, "[^{set}]"),
        }
    }
}

/// One slot per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPattern {
    slots: Vec<SlotMatch>,
}

impl WordPattern {
    #[must_use]
    pub const fn new(slots: Vec<SlotMatch>) -> Self {
        Self { slots }
    }

    /// A pattern that accepts every word of `width` letters
    #[must_use]
    pub fn any(width: usize) -> Self {
        Self::new(vec![SlotMatch::Any; width])
    }

    #[must_use]
    pub fn slots(&self) -> &[SlotMatch] {
        &self.slots
    }

    /// Whether every letter of `word` is accepted by its column
    ///
    /// Words of a different width never match.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.width() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, &letter)| slot.matches(letter))
    }
}

impl fmt::Display for WordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

/// Build the exclusion pattern
///
/// Column `c` rejects `never[c]` plus every globally absent letter that is neither `home[c]`
/// nor a priority letter of `c`. Columns with nothing to reject accept anything.
#[must_use]
pub fn exclusion_pattern(store: &ConstraintStore) -> WordPattern {
    let absent = store.global_absent();
    let slots = store
        .columns()
        .iter()
        .map(|column| {
            let mut keep = column.priority();
            if let Some(home) = column.home() {
                keep.insert(home);
            }
            let rejected = column.never().union(absent.difference(keep));
            if rejected.is_empty() {
                SlotMatch::Any
            } else {
                SlotMatch::NoneOf(rejected)
            }
        })
        .collect();
    WordPattern::new(slots)
}

/// Build the inclusion pattern
///
/// A column with a home letter accepts only that letter. A column with no priority letters accepts
/// anything while the allowed alphabet is still full. Every other column accepts its priority
/// letters or any allowed letter.
#[must_use]
pub fn inclusion_pattern(store: &ConstraintStore, allowed: LetterSet) -> WordPattern {
    let slots = store
        .columns()
        .iter()
        .map(|column| match column.home() {
            Some(home) => SlotMatch::Exactly(home),
            None if column.priority().is_empty() && allowed.is_full() => SlotMatch::Any,
            None => SlotMatch::OneOf(column.priority().union(allowed)),
        })
        .collect();
    WordPattern::new(slots)
}
