// src/services/fetch.rs

//! Profile page retrieval.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Trait for page retrieval backends.
///
/// Extraction and orchestration are written against this trait so they can
/// be exercised without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw markup behind a URL.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a configured `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured User-Agent and timeout.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
