// src/page_source/fetcher.rs
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::ScanConfig;
use crate::models::Result;

/// Thin HTTP layer for pulling down a public profile page. All network and
/// status failures surface here; the engine downstream never does I/O.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ScanConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
