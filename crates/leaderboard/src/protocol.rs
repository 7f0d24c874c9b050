//! Wire records for the leaderboard endpoint.

use serde::{Deserialize, Serialize};

/// Body of a score submission (`POST`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: u32,
}

/// Server-assigned entry id; backends differ on numeric vs string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

/// One stored leaderboard row (`GET`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: Option<EntryId>,
    pub player_name: String,
    pub score: i64,
}

/// Entry paired with its display rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
}

/// Ranks `1..=N` in the order the server returned them.
///
/// The server decides the ordering; entries are never re-sorted here.
pub fn ranked(entries: &[LeaderboardEntry]) -> impl Iterator<Item = RankedEntry<'_>> + '_ {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
}
