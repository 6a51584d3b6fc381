/// External API clients module
use crate::domain::{LaunchDetail, LaunchSummary, Statistics};
use crate::errors::{GatewayError, GatewayResult};
use crate::gateway::LaunchSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("launch-dash/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Launch API client: the raw, unpaginated collection plus detail and stats
pub struct LaunchApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl LaunchApiClient {
    pub fn new(base_url: String, timeout: Duration) -> GatewayResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self.http_client.get_client().get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(format!("{} returned 404", path)));
        }
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "Error Code: {}\nMessage: request to {} failed",
                status.as_u16(),
                path
            )));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LaunchSource for LaunchApiClient {
    /// Fetch every launch the API knows about
    async fn fetch_all(&self) -> GatewayResult<Vec<LaunchSummary>> {
        match self.get_json("/launches").await {
            // The collection itself is never "absent"
            Err(GatewayError::NotFound(msg)) => Err(GatewayError::Transport(msg)),
            other => other,
        }
    }

    async fn fetch_by_id(&self, id: &str) -> GatewayResult<LaunchDetail> {
        self.get_json(&format!("/launches/{}", id)).await
    }

    async fn fetch_statistics(&self) -> GatewayResult<Statistics> {
        match self.get_json("/launches/stats").await {
            Err(GatewayError::NotFound(msg)) => Err(GatewayError::Transport(msg)),
            other => other,
        }
    }
}
