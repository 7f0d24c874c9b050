//! Error types for the game core.

use thiserror::Error;

use crate::types::{Coord, MAX_NAME_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("coordinate ({}, {}) is outside the {size}x{size} board", .coord.row, .coord.col)]
    OutOfBounds { coord: Coord, size: u16 },

    #[error("board size {0} is not supported")]
    InvalidBoardSize(u16),

    #[error("snake layout is not a contiguous path on the board")]
    InvalidLayout,

    #[error("game configuration is inconsistent")]
    InvalidConfig,

    #[error("Please enter your name (max {max} chars)", max = MAX_NAME_LEN)]
    InvalidName,

    #[error("cannot {command} while the game is {phase}")]
    InvalidPhase {
        command: &'static str,
        phase: &'static str,
    },
}
