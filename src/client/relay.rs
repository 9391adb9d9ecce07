//! Transport from the client to the weather relay

use async_trait::async_trait;

use crate::domain::{DomainError, WeatherResult};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001";

/// Trait for the aggregate request (for mocking)
#[async_trait]
pub trait RelayTransport: Send + Sync + std::fmt::Debug {
    /// Fetch results for a raw comma-separated city list
    async fn fetch(&self, cities: &str) -> Result<Vec<WeatherResult>, DomainError>;
}

/// Relay client using reqwest
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn weather_url(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    async fn fetch(&self, cities: &str) -> Result<Vec<WeatherResult>, DomainError> {
        let response = self
            .client
            .get(self.weather_url())
            .query(&[("cities", cities)])
            .send()
            .await
            .map_err(|e| {
                DomainError::provider("relay", format!("Request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "relay",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| {
                DomainError::provider(
                    "relay",
                    format!("Failed to parse response: {}", e.without_url()),
                )
            })
    }
}
