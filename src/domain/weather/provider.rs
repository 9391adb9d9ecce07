use async_trait::async_trait;
use serde_json::Number;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Current conditions as reported by a weather provider.
/// Numbers keep the provider's representation (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub condition: String,
    pub temperature_c: Number,
    pub humidity: Number,
}

impl CurrentConditions {
    pub fn new(
        condition: impl Into<String>,
        temperature_c: impl Into<Number>,
        humidity: impl Into<Number>,
    ) -> Self {
        Self {
            condition: condition.into(),
            temperature_c: temperature_c.into(),
            humidity: humidity.into(),
        }
    }
}

/// Trait for weather providers (weatherapi.com, ...)
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a free-text location
    async fn current(&self, location: &str) -> Result<CurrentConditions, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
