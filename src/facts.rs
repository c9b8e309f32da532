//! Random cat fact lookup.
//!
//! One GET per request, no retries. Callers decide what to do with a failure;
//! the TUI logs it and keeps showing the previous fact.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Public endpoint returning `{"fact": "...", "length": N}`
pub const DEFAULT_ENDPOINT: &str = "https://catfact.ninja/fact";

#[derive(Debug, Error)]
pub enum FactError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("fact endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed fact response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

#[derive(Debug, Clone)]
pub struct FactClient {
    endpoint: String,
    http: reqwest::Client,
}

impl FactClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FactError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("purrview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one fact from the endpoint
    pub async fn fetch(&self) -> Result<String, FactError> {
        tracing::debug!("Requesting cat fact from {}", self.endpoint);
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        // Decode from text so a bad body is reported as a decode error
        // rather than a transport error
        let body = response.text().await?;
        let parsed: FactResponse = serde_json::from_str(&body)?;
        Ok(parsed.fact)
    }
}
