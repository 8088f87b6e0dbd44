//! Command implementations

pub mod play;
pub mod simple;
pub mod solve;

pub use play::{GameReport, Turn, play_game, run_session};
pub use simple::run_simple;
pub use solve::solve_word;
