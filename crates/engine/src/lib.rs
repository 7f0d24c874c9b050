//! Game loop driver.
//!
//! The core crate has no notion of time. This crate owns the tick clock and a
//! [`GameSession`] that decides when `GameState::step` runs. Time is passed in
//! as milliseconds so the whole driver is testable without sleeping.

pub mod clock;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::TickClock;
pub use session::GameSession;
