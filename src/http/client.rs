use anyhow::{Context, Result};
use reqwest::Client;

use crate::errors::FetchError;

/// HTTP client for single-shot GET requests. Library default timeouts, no retries.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Self::build_client(user_agent)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}
