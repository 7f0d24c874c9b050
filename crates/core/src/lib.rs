//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid and the coordinate <-> cell id mapping
//! - [`snake`]: Snake body with its occupancy index, movement and growth
//! - [`food`]: Food placement and reward tier rolls
//! - [`scoring`]: Reward points and speed progression
//! - [`game_state`]: Phase machine and the per-tick step
//! - [`rng`]: Small seeded LCG
//!
//! # Game Rules
//!
//! - The snake starts as one segment one third of the way into the board,
//!   moving right, with food five cells after it.
//! - Leaving the board or running into the body ends the game.
//! - Food is worth 1, 5 or 10 points depending on its tier (80/15/5 percent).
//! - Every 50 points the tick interval drops by 20ms, down to 50ms.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, Phase};
//!
//! let mut game = GameState::new(GameConfig::with_seed(12345)).unwrap();
//! game.start("ada").unwrap();
//!
//! game.change_direction(Direction::Down);
//! game.step();
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.snake().len(), 1);
//! ```
//!
//! # Timing
//!
//! The core has no clock. Call [`GameState::step`](game_state::GameState::step)
//! once per tick; [`GameState::tick_interval_ms`](game_state::GameState::tick_interval_ms)
//! says how long a tick should be at the current speed.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod geometry;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::CoreError;
pub use food::{place_food, roll_reward_tier};
pub use game_state::{GameState, StepEvents};
pub use geometry::{direction_between, step};
pub use rng::SimpleRng;
pub use scoring::{apply_speed_progression, reward_points, Speed};
pub use snake::{Segment, Snake};
pub use snapshot::GameSnapshot;
