// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::UpstreamConfig;

/// Anything that can fetch a URL and hand back the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET request and return the body as text.
    ///
    /// Transport failures and non-success statuses are `UpstreamUnavailable`.
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &UpstreamConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::config(format!("cannot build HTTP client: {e}")))?;
    Ok(client)
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::upstream_unavailable(url, e))?;

        response
            .text()
            .await
            .map_err(|e| AppError::upstream_unavailable(url, e))
    }
}
