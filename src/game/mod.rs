//! Game and session state
//!
//! A [`GameState`] is created per puzzle and finalised into a [`GameResult`]. Results are rolled
//! into a [`SessionAggregate`] under the control of a [`SessionController`].

mod grid;
mod metrics;
mod result;
mod session;
mod state;

pub use grid::{Cell, CellFeedback, Grid, RowFeedback};
pub use metrics::{GameMetrics, unix_now};
pub use result::{GameResult, RowSummary};
pub use session::{SessionAggregate, SessionController};
pub use state::GameState;

#[cfg(test)]
pub(crate) use result::fixtures::result as result_fixture;
