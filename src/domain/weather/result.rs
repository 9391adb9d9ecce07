use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{CityQuery, CurrentConditions};

/// Message returned to callers when a single city could not be looked up.
/// The underlying provider error is only logged.
pub const FAILED_LOOKUP_MESSAGE: &str = "Failed to fetch weather data";

/// Current weather for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub weather: String,
    pub temperature: Number,
    pub humidity: Number,
}

/// A per-city lookup that failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedLookup {
    pub city: String,
    pub error: String,
}

/// Outcome of a single city lookup.
///
/// Serialized without a tag: success entries carry `weather`, `temperature`
/// and `humidity`, failure entries carry `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherResult {
    Success(CurrentWeather),
    Failure(FailedLookup),
}

impl WeatherResult {
    pub fn success(city: &CityQuery, conditions: CurrentConditions) -> Self {
        Self::Success(CurrentWeather {
            city: city.to_string(),
            weather: conditions.condition,
            temperature: conditions.temperature_c,
            humidity: conditions.humidity,
        })
    }

    pub fn failure(city: &CityQuery) -> Self {
        Self::Failure(FailedLookup {
            city: city.to_string(),
            error: FAILED_LOOKUP_MESSAGE.to_string(),
        })
    }

    pub fn city(&self) -> &str {
        match self {
            Self::Success(weather) => &weather.city,
            Self::Failure(failed) => &failed.city,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Consume the result, keeping only successful lookups
    pub fn into_success(self) -> Option<CurrentWeather> {
        match self {
            Self::Success(weather) => Some(weather),
            Self::Failure(_) => None,
        }
    }
}
