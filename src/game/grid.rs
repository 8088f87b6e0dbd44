//! The puzzle grid and the row feedback that fills it
//!
//! The grid is `rows × width` cells. Every cell has a fixed absolute index
//! (`row * width + column`) that incoming feedback must match.

use crate::core::{Feedback, Indicator, Word};

/// A single letter slot in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    absolute_index: usize,
    letter: Option<u8>,
    indicator: Option<Indicator>,
    attempted: bool,
}

impl Cell {
    fn blank(row: usize, column: usize, width: usize) -> Self {
        Self {
            row,
            column,
            absolute_index: row * width + column,
            letter: None,
            indicator: None,
            attempted: false,
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn absolute_index(&self) -> usize {
        self.absolute_index
    }

    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[must_use]
    pub const fn indicator(&self) -> Option<Indicator> {
        self.indicator
    }

    /// Whether the cell was locked in as part of a scored row
    #[must_use]
    pub const fn is_attempted(&self) -> bool {
        self.attempted
    }

    pub(crate) fn fill(&mut self, feedback: &CellFeedback) {
        self.letter = feedback.letter;
        self.indicator = feedback.indicator;
        self.attempted = feedback.attempted;
    }
}

/// Feedback read back for one cell of a submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFeedback {
    pub absolute_index: usize,
    pub letter: Option<u8>,
    pub indicator: Option<Indicator>,
    pub attempted: bool,
}

/// Feedback for a whole submitted row, cells in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFeedback {
    pub row: usize,
    pub cells: Vec<CellFeedback>,
}

impl RowFeedback {
    /// Build the locked-in feedback for `word` played on `row`
    ///
    /// # Panics
    /// Panics in debug mode if `word` and `feedback` differ in width
    #[must_use]
    pub fn scored(row: usize, word: &Word, feedback: &Feedback) -> Self {
        debug_assert_eq!(word.width(), feedback.width());
        let width = word.width();
        let cells = word
            .chars()
            .iter()
            .zip(feedback.indicators())
            .enumerate()
            .map(|(column, (&letter, &indicator))| CellFeedback {
                absolute_index: row * width + column,
                letter: Some(letter),
                indicator: Some(indicator),
                attempted: true,
            })
            .collect();
        Self { row, cells }
    }
}

/// All cells of a game, row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// A blank grid
    #[must_use]
    pub fn new(rows: usize, width: usize) -> Self {
        let rows = (0..rows)
            .map(|row| (0..width).map(|column| Cell::blank(row, column, width)).collect())
            .collect();
        Self { width, rows }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// # Panics
    /// Panics if `row` is out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Vec<Cell> {
        &mut self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Rows whose first cell has been locked in
    #[must_use]
    pub fn attempted_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.first().is_some_and(Cell::is_attempted))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_indices_run_across_rows() {
        let grid = Grid::new(6, 5);
        let indices: Vec<usize> = grid
            .rows()
            .flat_map(|row| row.iter().map(Cell::absolute_index))
            .collect();
        assert_eq!(indices, (0..30).collect::<Vec<_>>());
        assert_eq!(grid.row(2)[3].row(), 2);
        assert_eq!(grid.row(2)[3].column(), 3);
    }

    #[test]
    fn blank_grid_has_no_attempts() {
        let grid = Grid::new(6, 5);
        assert_eq!(grid.attempted_rows(), 0);
        assert!(grid.row(0).iter().all(|c| c.letter().is_none()));
    }

    #[test]
    fn scored_row_feedback_targets_row_cells() {
        let word = Word::new("place").unwrap();
        let feedback: Feedback = "--Y-Y".parse().unwrap();
        let row = RowFeedback::scored(1, &word, &feedback);

        assert_eq!(row.row, 1);
        assert_eq!(row.cells.len(), 5);
        assert_eq!(row.cells[0].absolute_index, 5);
        assert_eq!(row.cells[4].absolute_index, 9);
        assert_eq!(row.cells[2].letter, Some(b'a'));
        assert_eq!(row.cells[2].indicator, Some(Indicator::Elsewhere));
        assert!(row.cells.iter().all(|c| c.attempted));
    }

    #[test]
    fn filled_rows_count_as_attempted() {
        let mut grid = Grid::new(3, 3);
        let row = RowFeedback::scored(0, &Word::new("cat").unwrap(), &"G--".parse().unwrap());
        for (cell, fb) in grid.row_mut(0).iter_mut().zip(&row.cells) {
            cell.fill(fb);
        }
        assert_eq!(grid.attempted_rows(), 1);
        assert_eq!(grid.row(0)[0].indicator(), Some(Indicator::Correct));
    }
}
