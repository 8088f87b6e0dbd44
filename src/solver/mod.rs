//! Candidate elimination engine
//!
//! This module holds the accumulated letter knowledge for a game, the rules that fold feedback
//! into it, and the narrowing and selection steps that turn it into the next guess.

mod constraints;
mod error;
pub mod filter;
pub mod knowledge;
pub mod patterns;
pub mod selector;

pub use constraints::{ColumnConstraint, ConstraintStore};
pub use error::SolverError;
pub use filter::narrow;
pub use knowledge::apply_feedback;
pub use patterns::{SlotMatch, WordPattern, exclusion_pattern, inclusion_pattern};
pub use selector::{Phase, select_guess, select_starting_word};
