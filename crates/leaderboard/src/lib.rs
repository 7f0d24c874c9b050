//! Leaderboard module - remote score submission and retrieval
//!
//! The leaderboard is an HTTP(S) endpoint that accepts a JSON score on
//! `POST` and returns the stored entries on `GET`, both at the same URL:
//!
//! ```text
//! POST /adduser  {"player_name":"ada","score":42}
//! GET  /adduser  -> [{"id":1,"player_name":"ada","score":42}, ...]
//! ```
//!
//! The game loop is synchronous, so [`Leaderboard`] owns a small tokio runtime
//! and hands results back over a channel. Failures are logged and dropped; the
//! game never waits on the network. [`Standings`] keeps the last good entries
//! on screen while a refresh is pending or after one fails.
//!
//! # Environment Variables
//!
//! - `SNAKE_LEADERBOARD_URL`: endpoint (default `http://127.0.0.1:8080/adduser`)
//! - `SNAKE_LEADERBOARD_TIMEOUT_MS`: per-request timeout (default 5000)
//! - `SNAKE_LEADERBOARD_DISABLED`: set to "1" or "true" to turn the client off

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod runtime;
pub mod standings;

pub use client::{HttpLeaderboardClient, MAX_BODY_BYTES};
pub use config::LeaderboardConfig;
pub use error::LeaderboardError;
pub use protocol::{ranked, EntryId, LeaderboardEntry, RankedEntry, ScoreSubmission};
pub use runtime::{Leaderboard, LeaderboardUpdate};
pub use standings::{FetchState, Standings};
