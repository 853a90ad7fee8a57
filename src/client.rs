// src/client.rs - Thin HTTP collaborator: one URL in, page text out.
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{Result, ScrapeError};

pub struct PageClient {
    client: Client,
}

impl PageClient {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a page and returns its body text. Any network failure or
    /// non-success status is an error; there is no status-code branching.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
