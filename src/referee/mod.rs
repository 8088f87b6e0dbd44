//! Feedback sources
//!
//! A [`Referee`] plays the part of the puzzle: it is handed a word for a row and answers with the
//! locked-in feedback, or says the word was not accepted.

mod simulated;
mod terminal;

pub use simulated::SimulatedPuzzle;
pub use terminal::TerminalReferee;

use crate::core::Word;
use crate::game::RowFeedback;

/// What the puzzle did with a submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The word was not accepted; nothing was locked in
    Rejected,
    /// The word was locked in with this feedback
    Scored(RowFeedback),
    /// The player walked away
    Abandoned,
}

/// Something that scores words typed into the grid
pub trait Referee {
    /// Enter `word` on `row` and read the row back
    ///
    /// # Errors
    /// Returns an error if the feedback could not be obtained at all
    fn submit(&mut self, row: usize, word: &Word) -> anyhow::Result<Verdict>;
}
