//! Wordle Bot
//!
//! A word puzzle player that accumulates per-column letter knowledge from feedback and narrows a
//! candidate list until one word is left.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_bot::core::{Feedback, Word};
//! use wordle_bot::game::{GameState, RowFeedback};
//! use wordle_bot::wordlists::{WORDS_5, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS_5);
//! let starting = vec![Word::new("crane").unwrap()];
//! let mut game = GameState::new(6, 5, words, starting).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let (_, guess) = game.next_guess(&mut rng).unwrap();
//! let answer = Word::new("denim").unwrap();
//! let feedback = Feedback::calculate(&guess, &answer);
//! game.record_attempt(&guess, &RowFeedback::scored(0, &guess, &feedback))
//!     .unwrap();
//!
//! assert_eq!(game.metrics().attempted_rows, 1);
//! ```

// Core domain types
pub mod core;

// Knowledge accumulation and candidate elimination
pub mod solver;

// Per-game and per-session state
pub mod game;

// Feedback sources
pub mod referee;

// Puzzle and session settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
