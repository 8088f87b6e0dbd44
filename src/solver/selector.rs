//! Guess selection
//!
//! The first guess of a game comes from the starting-word list. After that the candidate pool is
//! narrowed against the current knowledge and a survivor is drawn at random.

use super::SolverError;
use super::constraints::ConstraintStore;
use super::filter::narrow;
use super::patterns::{exclusion_pattern, inclusion_pattern};
use crate::core::{LetterSet, Word};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Where the game stood when a guess was chosen
///
/// A pool that narrows to nothing is reported as `SolverError::PuzzleExhausted` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No row has been attempted yet
    Start,
    /// Several candidates survive
    Narrowing,
    /// Exactly one candidate survives
    Single,
}

/// Draw an unused starting word
///
/// # Errors
/// Returns `SolverError::StartingWordsExhausted` if every starting word is used
pub fn select_starting_word<R: Rng + ?Sized>(
    starting_words: &[Word],
    used_words: &FxHashSet<Word>,
    rng: &mut R,
) -> Result<Word, SolverError> {
    let fresh: Vec<&Word> = starting_words
        .iter()
        .filter(|w| !used_words.contains(*w))
        .collect();

    let word = fresh
        .choose(rng)
        .map(|w| (*w).clone())
        .ok_or(SolverError::StartingWordsExhausted)?;
    info!("starting with '{word}'");
    Ok(word)
}

/// Narrow `pool` in place and pick the next guess from the survivors
///
/// The pool is replaced with the survivors, so later calls keep narrowing from here.
///
/// # Errors
/// Returns `SolverError::PuzzleExhausted` if no candidate survives. The pool is left empty.
pub fn select_guess<R: Rng + ?Sized>(
    store: &ConstraintStore,
    allowed: LetterSet,
    pool: &mut Vec<Word>,
    used_words: &FxHashSet<Word>,
    rng: &mut R,
) -> Result<(Phase, Word), SolverError> {
    let exclusion = exclusion_pattern(store);
    let inclusion = inclusion_pattern(store, allowed);
    *pool = narrow(pool, &exclusion, &inclusion, used_words, store.all_priority());

    match pool.len() {
        0 => {
            debug!("no candidates left");
            Err(SolverError::PuzzleExhausted)
        }
        1 => {
            let word = pool[0].clone();
            info!("single candidate left: '{word}'");
            Ok((Phase::Single, word))
        }
        n => {
            let word = pool.choose(rng).cloned().ok_or(SolverError::PuzzleExhausted)?;
            info!("{n} candidates left, trying '{word}'");
            Ok((Phase::Narrowing, word))
        }
    }
}
