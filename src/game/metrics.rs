//! Running per-game metrics

use crate::core::Word;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in whole seconds since the Unix epoch
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Progress of one game, recomputed after every attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMetrics {
    pub attempted_rows: usize,
    /// Confirmed letters in column order, unknown columns skipped
    pub correct_letters: Vec<u8>,
    pub num_correct: usize,
    /// Share of confirmed columns, rounded to a whole percent
    pub percent_complete: u32,
    pub started_at: u64,
    pub ended_at: Option<u64>,
    pub solution: Option<Word>,
}

impl GameMetrics {
    #[must_use]
    pub const fn new(started_at: u64) -> Self {
        Self {
            attempted_rows: 0,
            correct_letters: Vec::new(),
            num_correct: 0,
            percent_complete: 0,
            started_at,
            ended_at: None,
            solution: None,
        }
    }

    /// Refresh the letter counts from the confirmed letters
    pub fn update(&mut self, attempted_rows: usize, correct_letters: Vec<u8>, width: usize) {
        self.attempted_rows = attempted_rows;
        self.num_correct = correct_letters.len();
        self.correct_letters = correct_letters;
        self.percent_complete = percent(self.num_correct, width);
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
