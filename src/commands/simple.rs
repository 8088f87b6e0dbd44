//! Simple interactive CLI mode
//!
//! The engine suggests each word; the player types it into the real puzzle and reports back
//! the colours.

use super::play::{GameReport, play_game};
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::GameState;
use crate::referee::TerminalReferee;
use anyhow::{Context, Result};
use rand::Rng;

/// Run one interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word lists do not fit the puzzle or the terminal cannot be read.
pub fn run_simple<R: Rng + ?Sized>(
    config: &GameConfig,
    words: &[Word],
    starting_words: &[Word],
    rng: &mut R,
) -> Result<GameReport> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Bot - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a word for each row. Type it into the puzzle, then");
    println!("enter the colours it shows:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Type 'win' if it was all green");
    println!("  - Type 'x' if the puzzle did not accept the word");
    println!("  - Type 'quit' to stop\n");

    let state = GameState::new(
        config.rows,
        config.width,
        words.to_vec(),
        starting_words.to_vec(),
    )
    .context("word lists do not fit the puzzle")?;
    let mut referee = TerminalReferee::stdio();
    play_game(state, &mut referee, rng)
}
