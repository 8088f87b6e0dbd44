//! Formatting utilities for terminal output

use crate::game::GameResult;

/// Short outcome label for a finished game
#[must_use]
pub const fn outcome_label(result: &GameResult) -> &'static str {
    if result.is_solved() {
        "SOLVED"
    } else if result.is_lost() {
        "LOST"
    } else {
        "ABANDONED"
    }
}

/// Format whole seconds as "42s" or "3m 07s"
#[must_use]
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line of the session table: game #, outcome, solution, duration, rows used
#[must_use]
pub fn game_row(number: usize, result: &GameResult) -> String {
    let solution = result
        .solution()
        .map_or_else(|| "-".to_string(), |w| w.text().to_uppercase());
    format!(
        "{:>4}  {:<9}  {:<8}  {:>7}  {}/{}",
        number,
        outcome_label(result),
        solution,
        format_duration(result.duration_secs()),
        result.rows_used(),
        result.rows_available()
    )
}
