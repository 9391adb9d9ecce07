//! Weather service - fans a city list out to the provider and aggregates the outcomes

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error};

use crate::domain::{CityQuery, WeatherProvider, WeatherResult};

/// Weather service for aggregate lookups
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    /// Create a new WeatherService backed by the given provider
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Look up a single city, downgrading any provider error to a failure entry
    pub async fn lookup(&self, city: &CityQuery) -> WeatherResult {
        match self.provider.current(city.as_str()).await {
            Ok(conditions) => WeatherResult::success(city, conditions),
            Err(e) => {
                error!(
                    city = %city,
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Error fetching weather data"
                );
                WeatherResult::failure(city)
            }
        }
    }

    /// Look up every city concurrently.
    ///
    /// Waits for all lookups to settle; the output has one entry per input
    /// city, in input order.
    pub async fn lookup_all(&self, cities: &[CityQuery]) -> Vec<WeatherResult> {
        debug!(count = cities.len(), "Looking up weather for cities");

        join_all(cities.iter().map(|city| self.lookup(city))).await
    }
}
