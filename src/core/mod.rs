//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types: words, letter sets and per-letter
//! feedback. Everything here is pure and free of game state.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Indicator};
pub use letters::{ALPHABET, LetterSet};
pub use word::{Word, WordError};
