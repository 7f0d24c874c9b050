//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer, and the renderer flushes only what changed to the terminal.
//! No widget or layout library is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_leaderboard as leaderboard;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tier_color, BoardArea, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
