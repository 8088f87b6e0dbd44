//! Per-puzzle game state
//!
//! [`GameState`] owns everything one puzzle needs: the grid, the candidate and starting pools,
//! the accumulated knowledge and the running metrics. It is mutated in place by each recorded
//! attempt and consumed by [`GameState::finalize`].

use super::grid::{Grid, RowFeedback};
use super::metrics::{GameMetrics, unix_now};
use super::result::{GameResult, RowSummary};
use crate::core::{LetterSet, Word};
use crate::solver::{
    ConstraintStore, Phase, SolverError, apply_feedback, select_guess, select_starting_word,
};
use log::{info, warn};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Live state of one puzzle
#[derive(Debug, Clone)]
pub struct GameState {
    rows: usize,
    width: usize,
    grid: Grid,
    pool: Vec<Word>,
    starting_words: Vec<Word>,
    used_words: FxHashSet<Word>,
    allowed: LetterSet,
    store: ConstraintStore,
    metrics: GameMetrics,
    solved: bool,
    lost: bool,
}

impl GameState {
    /// Start a new puzzle
    ///
    /// # Errors
    /// Returns `SolverError::ConfigurationMismatch` if any word in either pool is not `width`
    /// letters long
    pub fn new(
        rows: usize,
        width: usize,
        word_pool: Vec<Word>,
        starting_pool: Vec<Word>,
    ) -> Result<Self, SolverError> {
        check_width(&word_pool, width)?;
        check_width(&starting_pool, width)?;

        info!(
            "new game: {rows} rows of {width} letters, {} candidates, {} starting words",
            word_pool.len(),
            starting_pool.len()
        );

        Ok(Self {
            rows,
            width,
            grid: Grid::new(rows, width),
            pool: word_pool,
            starting_words: starting_pool,
            used_words: FxHashSet::default(),
            allowed: LetterSet::full(),
            store: ConstraintStore::new(width),
            metrics: GameMetrics::new(unix_now()),
            solved: false,
            lost: false,
        })
    }

    /// Choose the next word to try
    ///
    /// # Errors
    /// Returns `SolverError::PuzzleExhausted` when no candidate survives narrowing, or
    /// `SolverError::StartingWordsExhausted` when every starting word has been used up
    pub fn next_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Phase, Word), SolverError> {
        if self.metrics.attempted_rows == 0 {
            let word = select_starting_word(&self.starting_words, &self.used_words, rng)?;
            return Ok((Phase::Start, word));
        }
        select_guess(
            &self.store,
            self.allowed,
            &mut self.pool,
            &self.used_words,
            rng,
        )
    }

    /// Note a word the puzzle refused to accept
    ///
    /// The knowledge is left alone. The word is simply never proposed again.
    pub fn record_rejected_guess(&mut self, word: &Word) {
        warn!("'{word}' was not accepted");
        self.used_words.insert(word.clone());
    }

    /// Lock in the feedback for an attempted word
    ///
    /// The row is validated in full before anything is changed. On error the state is
    /// untouched.
    ///
    /// # Errors
    /// - `SolverError::RowOutOfRange` if the feedback targets a row outside the grid
    /// - `SolverError::ConfigurationMismatch` if `word` is not `width` letters long
    /// - `SolverError::FeedbackWidthMismatch` if the row does not carry `width` cells
    /// - `SolverError::FeedbackIndexMismatch` if a cell's absolute index does not match the grid
    /// - `SolverError::FeedbackLetterMismatch` if a cell's letter is not the word's letter there
    /// - `SolverError::InconsistentHomeAssignment` if a confirmed column would change letter
    pub fn record_attempt(&mut self, word: &Word, feedback: &RowFeedback) -> Result<(), SolverError> {
        if feedback.row >= self.rows {
            return Err(SolverError::RowOutOfRange {
                row: feedback.row,
                rows: self.rows,
            });
        }
        check_width(std::slice::from_ref(word), self.width)?;
        if feedback.cells.len() != self.width {
            return Err(SolverError::FeedbackWidthMismatch {
                expected: self.width,
                found: feedback.cells.len(),
            });
        }

        let mut row = self.grid.row(feedback.row).to_vec();
        for (cell, incoming) in row.iter_mut().zip(&feedback.cells) {
            if cell.absolute_index() != incoming.absolute_index {
                return Err(SolverError::FeedbackIndexMismatch {
                    expected: cell.absolute_index(),
                    found: incoming.absolute_index,
                });
            }
            cell.fill(incoming);
        }

        apply_feedback(
            &mut self.store,
            &mut self.pool,
            &mut self.used_words,
            word,
            &row,
        )?;
        *self.grid.row_mut(feedback.row) = row;

        self.allowed = self.store.allowed_alphabet();
        self.metrics.update(
            self.grid.attempted_rows(),
            self.store.correct_letters(),
            self.width,
        );

        if self.metrics.num_correct == self.width {
            self.solved = true;
            // the home letters spell the answer even when confirmed across several rows
            self.metrics.solution = self.store.solved_word();
            self.metrics.ended_at = Some(unix_now());
            info!("solved in {} rows: '{word}'", self.metrics.attempted_rows);
        } else if self.metrics.attempted_rows == self.rows {
            self.lost = true;
            self.metrics.ended_at = Some(unix_now());
            info!(
                "lost after {} rows, {}% complete",
                self.rows, self.metrics.percent_complete
            );
        }
        Ok(())
    }

    /// Consume the game into its final snapshot
    #[must_use]
    pub fn finalize(self) -> GameResult {
        let rows = self
            .grid
            .rows()
            .enumerate()
            .filter(|(_, cells)| cells.first().is_some_and(super::Cell::is_attempted))
            .map(|(index, cells)| RowSummary::from_cells(index, cells))
            .collect();

        GameResult {
            solution: self.metrics.solution,
            rows,
            rows_available: self.rows,
            letters_per_row: self.width,
            started_at: self.metrics.started_at,
            ended_at: self.metrics.ended_at.unwrap_or_else(unix_now),
            solved: self.solved,
            lost: self.lost,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Candidates still in play
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<Word> {
        &self.used_words
    }

    /// Full alphabet minus the letters known to be absent
    #[must_use]
    pub const fn allowed_alphabet(&self) -> LetterSet {
        self.allowed
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.store
    }

    #[must_use]
    pub const fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.lost
    }

    /// Whether no further attempts should be made
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.solved || self.lost
    }

    /// The next row to fill, or `None` once the grid is full
    #[must_use]
    pub const fn next_row(&self) -> Option<usize> {
        if self.metrics.attempted_rows < self.rows {
            Some(self.metrics.attempted_rows)
        } else {
            None
        }
    }
}

fn check_width(words: &[Word], width: usize) -> Result<(), SolverError> {
    match words.iter().find(|w| w.width() != width) {
        Some(word) => Err(SolverError::ConfigurationMismatch {
            word: word.text().to_string(),
            expected: width,
            found: word.width(),
        }),
        None => Ok(()),
    }
}
