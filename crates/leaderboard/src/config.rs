//! Leaderboard configuration from the environment.

pub const DEFAULT_URL: &str = "http://127.0.0.1:8080/adduser";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardConfig {
    pub url: String,
    pub timeout_ms: u64,
    pub disabled: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            disabled: false,
        }
    }
}

impl LeaderboardConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let url = env::var("SNAKE_LEADERBOARD_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let timeout_ms = env::var("SNAKE_LEADERBOARD_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            url,
            timeout_ms,
            disabled: Self::is_disabled(),
        }
    }

    pub fn is_disabled() -> bool {
        std::env::var("SNAKE_LEADERBOARD_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = LeaderboardConfig::default();
        assert_eq!(c.url, "http://127.0.0.1:8080/adduser");
        assert_eq!(c.timeout_ms, 5_000);
        assert!(!c.disabled);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("SNAKE_LEADERBOARD_URL", "http://scores.local:9000/adduser");
        std::env::set_var("SNAKE_LEADERBOARD_TIMEOUT_MS", "250");
        std::env::set_var("SNAKE_LEADERBOARD_DISABLED", "TRUE");
        let c = LeaderboardConfig::from_env();
        std::env::remove_var("SNAKE_LEADERBOARD_URL");
        std::env::remove_var("SNAKE_LEADERBOARD_TIMEOUT_MS");
        std::env::remove_var("SNAKE_LEADERBOARD_DISABLED");

        assert_eq!(c.url, "http://scores.local:9000/adduser");
        assert_eq!(c.timeout_ms, 250);
        assert!(c.disabled);
    }
}
