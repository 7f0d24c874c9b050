//! Game configuration
//!
//! Defaults match the classic game: a 20x20 board, 150ms ticks that speed up
//! by 20ms every 50 points down to 50ms.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::CoreError;
use crate::types::{
    BOARD_SIZE, INITIAL_TICK_MS, MAX_BOARD_SIZE, MAX_NAME_LEN, MIN_BOARD_SIZE, MIN_TICK_MS,
    SCORE_PER_SPEED_TIER, TICK_DECREMENT_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u16,
    pub seed: u32,
    pub initial_tick_ms: u32,
    pub tick_decrement_ms: u32,
    pub min_tick_ms: u32,
    pub score_per_speed_tier: u32,
    pub max_name_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            seed: 1,
            initial_tick_ms: INITIAL_TICK_MS,
            tick_decrement_ms: TICK_DECREMENT_MS,
            min_tick_ms: MIN_TICK_MS,
            score_per_speed_tier: SCORE_PER_SPEED_TIER,
            max_name_len: MAX_NAME_LEN,
        }
    }
}

impl GameConfig {
    /// Default configuration with an explicit seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// - `SNAKE_BOARD_SIZE`: board side length (default 20)
    /// - `SNAKE_SEED`: RNG seed (default: derived from the clock)
    pub fn from_env() -> Self {
        use std::env;

        let board_size = env::var("SNAKE_BOARD_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(BOARD_SIZE);

        let seed = env::var("SNAKE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            board_size,
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(CoreError::InvalidBoardSize(self.board_size));
        }
        if self.score_per_speed_tier == 0
            || self.min_tick_ms == 0
            || self.initial_tick_ms < self.min_tick_ms
            || self.max_name_len == 0
        {
            return Err(CoreError::InvalidConfig);
        }
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
