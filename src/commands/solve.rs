//! Word solving command
//!
//! Plays a single simulated game against a chosen answer and returns the trace.

use super::play::{GameReport, play_game};
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::GameState;
use crate::referee::SimulatedPuzzle;
use anyhow::{Context, Result, bail};
use rand::Rng;

/// Solve `target` using `words` as the candidate list
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or has the wrong length
/// - The target is not in the candidate list (the engine only ever guesses from it)
/// - The word lists do not match the configured width
pub fn solve_word<R: Rng + ?Sized>(
    config: &GameConfig,
    target: &str,
    words: &[Word],
    starting_words: &[Word],
    rng: &mut R,
) -> Result<GameReport> {
    let target = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;
    if target.width() != config.width {
        bail!(
            "'{target}' has {} letters, the puzzle has {}",
            target.width(),
            config.width
        );
    }
    if !words.contains(&target) {
        bail!("'{target}' is not in the word list");
    }

    let state = GameState::new(
        config.rows,
        config.width,
        words.to_vec(),
        starting_words.to_vec(),
    )
    .context("word lists do not fit the puzzle")?;
    let mut puzzle = SimulatedPuzzle::new(target, words.iter().cloned());
    play_game(state, &mut puzzle, rng)
}
