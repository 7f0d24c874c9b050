//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`UiAction`]s. What a key means depends on
//! the game phase: before the first start the keyboard types the player name,
//! afterwards it steers the snake.

pub mod map;
pub mod name;

pub use tui_snake_types as types;

pub use map::{map_key, should_quit, UiAction};
pub use name::NameInput;
