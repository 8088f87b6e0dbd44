//! Finished game snapshots

use super::Cell;
use crate::core::{Indicator, Word};

/// Summary of one attempted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    pub row_index: usize,
    pub attempted_word: String,
    pub num_correct: usize,
    pub num_elsewhere: usize,
    pub num_absent: usize,
}

impl RowSummary {
    pub(crate) fn from_cells(row_index: usize, cells: &[Cell]) -> Self {
        let count = |indicator| cells.iter().filter(|c| c.indicator() == Some(indicator)).count();
        Self {
            row_index,
            attempted_word: cells.iter().filter_map(Cell::letter).map(char::from).collect(),
            num_correct: count(Indicator::Correct),
            num_elsewhere: count(Indicator::Elsewhere),
            num_absent: count(Indicator::Absent),
        }
    }
}

/// Immutable record of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub(super) solution: Option<Word>,
    pub(super) rows: Vec<RowSummary>,
    pub(super) rows_available: usize,
    pub(super) letters_per_row: usize,
    pub(super) started_at: u64,
    pub(super) ended_at: u64,
    pub(super) solved: bool,
    pub(super) lost: bool,
}

impl GameResult {
    #[must_use]
    pub const fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    /// Attempted rows in grid order
    #[must_use]
    pub fn rows(&self) -> &[RowSummary] {
        &self.rows
    }

    #[must_use]
    pub fn rows_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn rows_available(&self) -> usize {
        self.rows_available
    }

    #[must_use]
    pub const fn letters_per_row(&self) -> usize {
        self.letters_per_row
    }

    /// Unix seconds
    #[must_use]
    pub const fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Unix seconds
    #[must_use]
    pub const fn ended_at(&self) -> u64 {
        self.ended_at
    }

    /// Whole seconds between start and end
    #[must_use]
    pub const fn duration_secs(&self) -> u64 {
        self.ended_at.saturating_sub(self.started_at)
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.lost
    }

    /// Neither solved nor lost, the game was cut short
    #[must_use]
    pub const fn is_abandoned(&self) -> bool {
        !self.solved && !self.lost
    }
}
