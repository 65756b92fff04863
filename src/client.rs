//! Art Institute of Chicago APIクライアント（reqwest）

use crate::config::Config;
use crate::error::Result;
use artwork_picker_common::{page_url, parse_page_response, ArtworkPage, Error, PageSource};
use std::time::Duration;
use tracing::debug;

pub struct ArticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(http, base_url))
    }

    /// 構築済みのreqwestクライアントを使う
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.effective_base_url(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PageSource for ArticClient {
    async fn fetch_page(&self, page: u32) -> artwork_picker_common::Result<ArtworkPage> {
        let url = page_url(&self.base_url, page);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        parse_page_response(&body)
    }
}
