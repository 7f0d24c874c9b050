use crate::types::{CellId, Coord, Direction, Phase, RewardTier};

/// Read-only view of a game for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board_size: u16,
    /// Snake coordinates, head first
    pub snake: Vec<Coord>,
    pub food: Option<Coord>,
    pub food_cell: CellId,
    pub food_tier: RewardTier,
    pub direction: Direction,
    pub score: u32,
    pub speed_tier: u32,
    pub tick_interval_ms: u32,
    pub phase: Phase,
    pub player_name: String,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Coord> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board_size: 0,
            snake: Vec::new(),
            food: None,
            food_cell: 0,
            food_tier: RewardTier::Common,
            direction: Direction::Right,
            score: 0,
            speed_tier: 0,
            tick_interval_ms: 0,
            phase: Phase::NotStarted,
            player_name: String::new(),
        }
    }
}
