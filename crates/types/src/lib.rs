//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board side length (the board is always square)
pub const BOARD_SIZE: u16 = 20;
pub const MIN_BOARD_SIZE: u16 = 4;
pub const MAX_BOARD_SIZE: u16 = 100;

/// Tick timing (in milliseconds)
pub const INITIAL_TICK_MS: u32 = 150;
pub const TICK_DECREMENT_MS: u32 = 20;
pub const MIN_TICK_MS: u32 = 50;

/// Score needed per speed tier
pub const SCORE_PER_SPEED_TIER: u32 = 50;

/// Player names are limited to this many characters
pub const MAX_NAME_LEN: usize = 10;

/// Initial food is placed this many cells after the snake's starting cell
pub const FOOD_START_OFFSET: u32 = 5;

/// Reward tier thresholds on a uniform draw in [0, 1)
pub const RARE_THRESHOLD: f64 = 0.05;
pub const UNCOMMON_THRESHOLD: f64 = 0.20;

/// Unique identifier of a board position, assigned row-major starting at 1
pub type CellId = u32;

/// Board coordinate (0-indexed). Signed so that a step off the board can be
/// represented and rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column delta for one step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Food reward bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RewardTier {
    #[default]
    Common,
    Uncommon,
    Rare,
}

impl RewardTier {
    /// Map a uniform draw in [0, 1) to a tier
    pub fn from_draw(value: f64) -> Self {
        if value < RARE_THRESHOLD {
            RewardTier::Rare
        } else if value < UNCOMMON_THRESHOLD {
            RewardTier::Uncommon
        } else {
            RewardTier::Common
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            RewardTier::Common => 1,
            RewardTier::Uncommon => 5,
            RewardTier::Rare => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardTier::Common => "common",
            RewardTier::Uncommon => "uncommon",
            RewardTier::Rare => "rare",
        }
    }
}

/// Commands from the presentation layer to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Start { name: String },
    ChangeDirection(Direction),
    Pause,
    Resume,
    TogglePause,
    Reset,
}

impl GameCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start { .. } => "start",
            GameCommand::ChangeDirection(_) => "changeDirection",
            GameCommand::Pause => "pause",
            GameCommand::Resume => "resume",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Reset => "reset",
        }
    }
}

/// Discrete events emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { score: u32 },
    GameOver { final_score: u32 },
    TierChanged { tier: RewardTier },
}
