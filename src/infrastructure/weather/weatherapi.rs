use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Number;

use super::http_client::HttpClientTrait;
use crate::domain::{CurrentConditions, DomainError, WeatherProvider};

pub const DEFAULT_WEATHERAPI_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// weatherapi.com current-conditions provider
#[derive(Debug)]
pub struct WeatherApiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> WeatherApiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_WEATHERAPI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<CurrentConditions, DomainError> {
        let response: WeatherApiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("weatherapi", format!("Failed to parse response: {}", e))
        })?;

        Ok(CurrentConditions::new(
            response.current.condition.text,
            response.current.temp_c,
            response.current.humidity,
        ))
    }
}

#[async_trait]
impl<C: HttpClientTrait> WeatherProvider for WeatherApiProvider<C> {
    async fn current(&self, location: &str) -> Result<CurrentConditions, DomainError> {
        let url = self.current_url();
        let query = [("key", self.api_key.as_str()), ("q", location)];

        let response = self.client.get_json(&url, &query).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "weatherapi"
    }
}

// weatherapi.com response types

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: WeatherApiCurrent,
}

#[derive(Debug, Deserialize)]
struct WeatherApiCurrent {
    temp_c: Number,
    humidity: Number,
    condition: WeatherApiCondition,
}

#[derive(Debug, Deserialize)]
struct WeatherApiCondition {
    text: String,
}
