//! Multi-game sessions
//!
//! [`SessionAggregate`] rolls finished games into summary counts. [`SessionController`] decides
//! whether another game should start; it is passed in and handed back by value so there is no
//! shared mutable state between games.

use super::metrics::unix_now;
use super::result::GameResult;
use log::info;

/// Rolled-up results of every game in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAggregate {
    games: Vec<GameResult>,
    solved: Vec<GameResult>,
    lost: Vec<GameResult>,
    started_at: u64,
    ended_at: Option<u64>,
}

impl Default for SessionAggregate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(unix_now())
    }

    #[must_use]
    pub const fn starting_at(started_at: u64) -> Self {
        Self {
            games: Vec::new(),
            solved: Vec::new(),
            lost: Vec::new(),
            started_at,
            ended_at: None,
        }
    }

    pub fn record_solved(&mut self, result: GameResult) {
        self.solved.push(result.clone());
        self.games.push(result);
    }

    pub fn record_lost(&mut self, result: GameResult) {
        self.lost.push(result.clone());
        self.games.push(result);
    }

    /// Record a finished game by its outcome
    ///
    /// Returns `false` for a game that ended neither solved nor lost. Such a game is not
    /// recorded.
    pub fn record_game_outcome(&mut self, result: GameResult) -> bool {
        if result.is_solved() {
            self.record_solved(result);
            true
        } else if result.is_lost() {
            self.record_lost(result);
            true
        } else {
            info!("game ended neither solved nor lost, not recorded");
            false
        }
    }

    /// Close the session
    #[must_use]
    pub fn finalize(self) -> Self {
        self.finalize_at(unix_now())
    }

    #[must_use]
    pub fn finalize_at(mut self, ended_at: u64) -> Self {
        self.ended_at = Some(ended_at);
        info!(
            "session over: {} of {} solved ({}%)",
            self.num_solved(),
            self.num_games(),
            self.success_percentage()
        );
        self
    }

    #[must_use]
    pub fn games(&self) -> &[GameResult] {
        &self.games
    }

    #[must_use]
    pub fn solved_games(&self) -> &[GameResult] {
        &self.solved
    }

    #[must_use]
    pub fn lost_games(&self) -> &[GameResult] {
        &self.lost
    }

    #[must_use]
    pub fn num_games(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn num_solved(&self) -> usize {
        self.solved.len()
    }

    #[must_use]
    pub fn num_lost(&self) -> usize {
        self.lost.len()
    }

    /// Solved share of all games, rounded to a whole percent; 0 for an empty session
    #[must_use]
    pub fn success_percentage(&self) -> u32 {
        if self.games.is_empty() {
            return 0;
        }
        (self.solved.len() as f64 / self.games.len() as f64 * 100.0).round() as u32
    }

    #[must_use]
    pub const fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Set once the session is finalised
    #[must_use]
    pub const fn ended_at(&self) -> Option<u64> {
        self.ended_at
    }

    #[must_use]
    pub fn duration_secs(&self) -> u64 {
        self.ended_at
            .map_or(0, |end| end.saturating_sub(self.started_at))
    }
}

/// How many more games to play and whether to keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionController {
    pub games_remaining: usize,
    pub should_restart: bool,
}

impl SessionController {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games_remaining: games,
            should_restart: games > 0,
        }
    }

    /// Record a finished game and work out whether another should start
    ///
    /// The session stops when the game budget runs out or a game ended neither solved nor lost.
    #[must_use]
    pub fn handle_end_of_game(self, aggregate: &mut SessionAggregate, result: GameResult) -> Self {
        let finished = aggregate.record_game_outcome(result);
        let games_remaining = self.games_remaining.saturating_sub(1);
        Self {
            games_remaining,
            should_restart: finished && games_remaining > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::result_fixture as result;

    #[test]
    fn one_solved_game() {
        let mut session = SessionAggregate::starting_at(0);
        assert!(session.record_game_outcome(result(true, false, 0, 10)));
        assert_eq!(session.num_solved(), 1);
        assert_eq!(session.num_games(), 1);
        assert_eq!(session.num_lost(), 0);
        assert_eq!(session.success_percentage(), 100);
    }

    #[test]
    fn mixed_outcomes() {
        let mut session = SessionAggregate::starting_at(100);
        session.record_solved(result(true, false, 100, 110));
        session.record_lost(result(false, true, 110, 130));
        session.record_solved(result(true, false, 130, 135));

        let session = session.finalize_at(160);
        assert_eq!(session.num_games(), 3);
        assert_eq!(session.solved_games().len(), 2);
        assert_eq!(session.lost_games().len(), 1);
        assert_eq!(session.success_percentage(), 67);
        assert_eq!(session.duration_secs(), 60);
    }

    #[test]
    fn empty_session_is_zero_percent() {
        let session = SessionAggregate::starting_at(5).finalize_at(5);
        assert_eq!(session.success_percentage(), 0);
        assert_eq!(session.ended_at(), Some(5));
    }

    #[test]
    fn abandoned_game_is_not_recorded() {
        let mut session = SessionAggregate::starting_at(0);
        assert!(!session.record_game_outcome(result(false, false, 0, 1)));
        assert_eq!(session.num_games(), 0);
        assert_eq!(session.num_solved() + session.num_lost(), 0);
    }

    #[test]
    fn abandoned_game_leaves_percentage_alone() {
        let mut session = SessionAggregate::starting_at(0);
        assert!(session.record_game_outcome(result(true, false, 0, 5)));
        assert!(!session.record_game_outcome(result(false, false, 5, 6)));
        assert_eq!(session.num_games(), 1);
        assert_eq!(session.num_solved(), 1);
        assert_eq!(session.num_lost(), 0);
        assert_eq!(session.success_percentage(), 100);
    }

    #[test]
    fn controller_counts_down() {
        let mut session = SessionAggregate::starting_at(0);
        let mut controller = SessionController::new(3);
        let mut played = 0;
        while controller.should_restart {
            controller = controller.handle_end_of_game(&mut session, result(true, false, 0, 1));
            played += 1;
        }
        assert_eq!(played, 3);
        assert_eq!(controller.games_remaining, 0);
        assert_eq!(session.num_games(), 3);
    }

    #[test]
    fn controller_stops_on_abandoned_game() {
        let mut session = SessionAggregate::starting_at(0);
        let controller = SessionController::new(20)
            .handle_end_of_game(&mut session, result(false, true, 0, 1))
            .handle_end_of_game(&mut session, result(false, false, 1, 2));
        assert!(!controller.should_restart);
        assert_eq!(controller.games_remaining, 18);
        assert_eq!(session.num_lost(), 1);
        assert_eq!(session.num_games(), 1);
    }

    #[test]
    fn zero_games_never_starts() {
        assert!(!SessionController::new(0).should_restart);
    }
}
