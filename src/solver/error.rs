//! Errors raised by the elimination engine
//!
//! None of these are retried by the engine. They are contract violations between the engine and
//! its feedback source, or the terminal state of a game that can no longer be won.

/// Error type for the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// Candidate pool narrowed to nothing
    #[error("puzzle exhausted: no candidate words remain")]
    PuzzleExhausted,

    /// Every starting word has already been tried or rejected
    #[error("no unused starting words remain")]
    StartingWordsExhausted,

    /// Feedback addressed to the wrong grid cell
    #[error("feedback for absolute index {found} does not match expected cell {expected}")]
    FeedbackIndexMismatch { expected: usize, found: usize },

    /// Feedback row carries the wrong number of cells
    #[error("feedback row has {found} cells, expected {expected}")]
    FeedbackWidthMismatch { expected: usize, found: usize },

    /// Feedback names a letter the attempted word does not have in that column
    #[error("feedback for column {column} names '{found}', the attempted word has '{expected}'")]
    FeedbackLetterMismatch {
        column: usize,
        expected: char,
        found: char,
    },

    /// Feedback addressed to a row outside the grid
    #[error("feedback for row {row} is outside the {rows}-row grid")]
    RowOutOfRange { row: usize, rows: usize },

    /// A column's confirmed letter would change
    #[error("column {column} already has home letter '{existing}', feedback says '{incoming}'")]
    InconsistentHomeAssignment {
        column: usize,
        existing: char,
        incoming: char,
    },

    /// A word pool entry does not have the configured width
    #[error("word '{word}' has {found} letters, expected {expected}")]
    ConfigurationMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
}
