//! An in-process puzzle with a known answer

use super::{Referee, Verdict};
use crate::core::{Feedback, Word};
use crate::game::RowFeedback;
use log::debug;
use rustc_hash::FxHashSet;

/// Scores guesses against a hidden answer
///
/// Words outside the dictionary are rejected the way the real puzzle refuses unknown words.
#[derive(Debug, Clone)]
pub struct SimulatedPuzzle {
    answer: Word,
    dictionary: FxHashSet<Word>,
}

impl SimulatedPuzzle {
    /// The answer is always accepted, even if it is missing from `dictionary`
    pub fn new(answer: Word, dictionary: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary: FxHashSet<Word> = dictionary.into_iter().collect();
        dictionary.insert(answer.clone());
        Self { answer, dictionary }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl Referee for SimulatedPuzzle {
    fn submit(&mut self, row: usize, word: &Word) -> anyhow::Result<Verdict> {
        if !self.dictionary.contains(word) {
            debug!("'{word}' is not in the dictionary");
            return Ok(Verdict::Rejected);
        }
        let feedback = Feedback::calculate(word, &self.answer);
        debug!("'{word}' on row {row} scores {feedback}");
        Ok(Verdict::Scored(RowFeedback::scored(row, word, &feedback)))
    }
}
