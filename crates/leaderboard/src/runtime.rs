//! Leaderboard runtime integration.
//!
//! Bridges the sync game loop with the async HTTP client: requests are spawned
//! on an owned tokio runtime and results come back over an unbounded channel
//! that the loop drains with [`Leaderboard::try_recv`].

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::client::HttpLeaderboardClient;
use crate::config::LeaderboardConfig;
use crate::protocol::LeaderboardEntry;

/// Result of a background leaderboard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardUpdate {
    Entries(Vec<LeaderboardEntry>),
    Unavailable(String),
}

/// Running leaderboard client.
pub struct Leaderboard {
    rt: Runtime,
    client: Arc<HttpLeaderboardClient>,
    tx: mpsc::UnboundedSender<LeaderboardUpdate>,
    rx: mpsc::UnboundedReceiver<LeaderboardUpdate>,
}

impl Leaderboard {
    /// Start from environment variables.
    ///
    /// Returns `Ok(None)` if `SNAKE_LEADERBOARD_DISABLED` is set.
    pub fn start_from_env() -> Result<Option<Self>> {
        Self::start(&LeaderboardConfig::from_env())
    }

    pub fn start(config: &LeaderboardConfig) -> Result<Option<Self>> {
        if config.disabled {
            info!("leaderboard disabled");
            return Ok(None);
        }

        let client = HttpLeaderboardClient::new(config).context("leaderboard url")?;
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("leaderboard")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;
        let (tx, rx) = mpsc::unbounded_channel();

        info!("leaderboard at {}", client.endpoint());
        Ok(Some(Self {
            rt,
            client: Arc::new(client),
            tx,
            rx,
        }))
    }

    /// Fetch the current entries in the background.
    pub fn refresh(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let _ = tx.send(fetch(&client).await);
        });
    }

    /// Submit a final score, then fetch the entries.
    ///
    /// The fetch runs even if the submit fails. Neither is retried.
    pub fn submit_and_refresh(&self, player_name: String, score: u32) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            if let Err(e) = client.submit_score(&player_name, score).await {
                warn!("score submit for {} failed: {}", player_name, e);
            }
            let _ = tx.send(fetch(&client).await);
        });
    }

    pub fn try_recv(&mut self) -> Option<LeaderboardUpdate> {
        self.rx.try_recv().ok()
    }
}

async fn fetch(client: &HttpLeaderboardClient) -> LeaderboardUpdate {
    match client.fetch_leaderboard().await {
        Ok(entries) => LeaderboardUpdate::Entries(entries),
        Err(e) => {
            warn!("leaderboard fetch failed: {}", e);
            LeaderboardUpdate::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_config_starts_nothing() {
        let config = LeaderboardConfig {
            disabled: true,
            ..LeaderboardConfig::default()
        };
        assert!(Leaderboard::start(&config).unwrap().is_none());
    }

    #[test]
    fn test_bad_url_is_an_error() {
        let config = LeaderboardConfig::new("ftp://nowhere");
        assert!(Leaderboard::start(&config).is_err());
    }

    #[test]
    fn test_https_url_starts_client() {
        let config = LeaderboardConfig::new("https://scores.example/adduser");
        assert!(Leaderboard::start(&config).unwrap().is_some());
    }

    #[test]
    fn test_unreachable_server_reports_unavailable() {
        // Port 9 (discard) on localhost is almost never listening.
        let config = LeaderboardConfig {
            url: "http://127.0.0.1:9/adduser".to_string(),
            timeout_ms: 500,
            disabled: false,
        };
        let mut lb = Leaderboard::start(&config).unwrap().unwrap();
        lb.refresh();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let update = loop {
            if let Some(u) = lb.try_recv() {
                break u;
            }
            assert!(std::time::Instant::now() < deadline, "no update received");
            std::thread::sleep(std::time::Duration::from_millis(10));
        };
        assert!(matches!(update, LeaderboardUpdate::Unavailable(_)));
    }
}
