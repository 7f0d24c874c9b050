//! JSON leaderboard client built on `reqwest`.
//!
//! One [`HttpLeaderboardClient`] holds a pooled `reqwest::Client` with the
//! configured per-request timeout. `http://` and `https://` (rustls) endpoints
//! are both accepted. Response bodies are read chunk by chunk and capped at
//! [`MAX_BODY_BYTES`].

use std::time::Duration;

use log::debug;
use reqwest::{Response, Url};

use crate::config::LeaderboardConfig;
use crate::error::LeaderboardError;
use crate::protocol::{LeaderboardEntry, ScoreSubmission};

/// Largest response body the client will buffer.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct HttpLeaderboardClient {
    http: reqwest::Client,
    url: Url,
    timeout_ms: u64,
    max_body_bytes: usize,
}

impl HttpLeaderboardClient {
    pub fn new(config: &LeaderboardConfig) -> Result<Self, LeaderboardError> {
        let url = parse_url(&config.url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            url,
            timeout_ms: config.timeout_ms,
            max_body_bytes: MAX_BODY_BYTES,
        })
    }

    /// Override the body cap.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.url
    }

    /// `POST` one score.
    pub async fn submit_score(&self, player_name: &str, score: u32) -> Result<(), LeaderboardError> {
        let submission = ScoreSubmission {
            player_name: player_name.to_string(),
            score,
        };
        let resp = self
            .http
            .post(self.url.clone())
            .json(&submission)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let status = check_status(&resp)?;
        debug!("score submitted: http {}", status);
        Ok(())
    }

    /// `GET` the stored entries in server order.
    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let resp = self
            .http
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        check_status(&resp)?;

        let body = self.read_body(resp).await?;
        let entries: Vec<LeaderboardEntry> = serde_json::from_slice(&body)?;
        debug!("fetched {} leaderboard entries", entries.len());
        Ok(entries)
    }

    async fn read_body(&self, mut resp: Response) -> Result<Vec<u8>, LeaderboardError> {
        let limit = self.max_body_bytes;
        if resp.content_length().is_some_and(|len| len > limit as u64) {
            return Err(LeaderboardError::BodyTooLarge(limit));
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(|e| self.request_error(e))? {
            if body.len() + chunk.len() > limit {
                return Err(LeaderboardError::BodyTooLarge(limit));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    fn request_error(&self, e: reqwest::Error) -> LeaderboardError {
        if e.is_timeout() {
            LeaderboardError::Timeout(self.timeout_ms)
        } else {
            LeaderboardError::Http(e)
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, LeaderboardError> {
    let invalid = || LeaderboardError::InvalidUrl(raw.to_string());
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
        _ => Err(invalid()),
    }
}

fn check_status(resp: &Response) -> Result<u16, LeaderboardError> {
    let status = resp.status();
    if status.is_success() {
        Ok(status.as_u16())
    } else {
        Err(LeaderboardError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        let url = parse_url("http://127.0.0.1:8080/adduser").unwrap();
        assert_eq!(url.port_or_known_default(), Some(8080));
        assert_eq!(url.path(), "/adduser");

        let url = parse_url("https://scores.example/adduser").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.port_or_known_default(), Some(443));
    }

    #[test]
    fn test_rejects_unsupported_urls() {
        assert!(parse_url("ftp://scores.example/adduser").is_err());
        assert!(parse_url("http://host:notaport/").is_err());
        assert!(parse_url("scores.example").is_err());
        assert!(parse_url("").is_err());
    }

    #[test]
    fn test_client_keeps_configured_endpoint() {
        let config = LeaderboardConfig::new("https://scores.example/adduser");
        let client = HttpLeaderboardClient::new(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://scores.example/adduser");
        assert_eq!(client.max_body_bytes, MAX_BODY_BYTES);
        assert_eq!(client.with_max_body_bytes(16).max_body_bytes, 16);
    }
}
