//! Last known leaderboard plus the state of the request in flight.
//!
//! A failed or pending fetch never clears entries that were already shown;
//! they stay until a later fetch succeeds.

use crate::protocol::LeaderboardEntry;
use crate::runtime::LeaderboardUpdate;

/// Progress of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    entries: Option<Vec<LeaderboardEntry>>,
    fetch: FetchState,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as sent.
    pub fn begin_fetch(&mut self) {
        self.fetch = FetchState::Loading;
    }

    pub fn apply(&mut self, update: LeaderboardUpdate) {
        match update {
            LeaderboardUpdate::Entries(entries) => {
                self.entries = Some(entries);
                self.fetch = FetchState::Idle;
            }
            LeaderboardUpdate::Unavailable(_) => self.fetch = FetchState::Failed,
        }
    }

    /// Entries from the last successful fetch, `None` before the first one.
    pub fn entries(&self) -> Option<&[LeaderboardEntry]> {
        self.entries.as_deref()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: None,
            player_name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_starts_empty_and_idle() {
        let s = Standings::new();
        assert!(s.entries().is_none());
        assert_eq!(s.fetch_state(), FetchState::Idle);
    }

    #[test]
    fn test_success_replaces_entries() {
        let mut s = Standings::new();
        s.begin_fetch();
        s.apply(LeaderboardUpdate::Entries(vec![entry("ada", 3)]));
        s.apply(LeaderboardUpdate::Entries(vec![entry("bob", 9), entry("ada", 3)]));

        assert_eq!(s.fetch_state(), FetchState::Idle);
        let names: Vec<&str> = s.entries().unwrap().iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["bob", "ada"]);
    }

    #[test]
    fn test_reload_and_failure_keep_previous_entries() {
        let mut s = Standings::new();
        s.apply(LeaderboardUpdate::Entries(vec![entry("ada", 3)]));

        s.begin_fetch();
        assert_eq!(s.fetch_state(), FetchState::Loading);
        assert_eq!(s.entries().unwrap().len(), 1);

        s.apply(LeaderboardUpdate::Unavailable("timed out".to_string()));
        assert_eq!(s.fetch_state(), FetchState::Failed);
        assert_eq!(s.entries().unwrap()[0].player_name, "ada");
    }

    #[test]
    fn test_failure_before_any_success_has_no_entries() {
        let mut s = Standings::new();
        s.begin_fetch();
        s.apply(LeaderboardUpdate::Unavailable("refused".to_string()));
        assert!(s.entries().is_none());
        assert_eq!(s.fetch_state(), FetchState::Failed);
    }
}
