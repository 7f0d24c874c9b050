use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("invalid leaderboard url {0:?}")]
    InvalidUrl(String),

    #[error("leaderboard request timed out after {0}ms")]
    Timeout(u64),

    #[error("leaderboard http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("leaderboard response exceeds {0} bytes")]
    BodyTooLarge(usize),

    #[error("leaderboard returned http status {0}")]
    Status(u16),

    #[error("leaderboard json error: {0}")]
    Json(#[from] serde_json::Error),
}
