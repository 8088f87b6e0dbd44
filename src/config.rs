//! Puzzle and session settings

/// Default number of rows in the grid
pub const DEFAULT_ROWS: usize = 6;

/// Default number of letters per row
pub const DEFAULT_WIDTH: usize = 5;

/// Default number of games in a session
pub const DEFAULT_GAMES: usize = 20;

/// Shape of a single puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(rows: usize, width: usize) -> Self {
        Self { rows, width }
    }
}

/// Settings for a run of simulated games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub game: GameConfig,
    pub games: usize,
    pub show_progress: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: DEFAULT_GAMES,
            show_progress: true,
        }
    }
}
