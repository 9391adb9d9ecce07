//! Form controller - transient state behind the city lookup form

use tracing::error;

use super::relay::RelayTransport;
use crate::domain::{CurrentWeather, DomainError, WeatherResult};

pub const BLANK_INPUT_MESSAGE: &str = "Please enter at least one valid city";
pub const NO_VALID_CITIES_MESSAGE: &str = "No valid cities found";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// State of the lookup form: input text, last results, error, in-flight flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    input: String,
    results: Option<Vec<CurrentWeather>>,
    error: Option<String>,
    loading: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> Option<&[CurrentWeather]> {
        self.results.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is in flight; the submit affordance is disabled meanwhile
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the input text. Editing clears any displayed error.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.error = None;
    }

    /// Validate the input and mark the form in flight.
    ///
    /// Returns the query to send, or `None` after showing the blank-input
    /// error locally.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            self.error = Some(BLANK_INPUT_MESSAGE.to_string());
            self.results = None;
            return None;
        }

        self.loading = true;
        Some(self.input.clone())
    }

    /// Apply the outcome of the aggregate request and clear the in-flight flag
    pub fn complete(&mut self, outcome: Result<Vec<WeatherResult>, DomainError>) {
        match outcome {
            Ok(entries) => {
                let successes: Vec<CurrentWeather> = entries
                    .into_iter()
                    .filter_map(WeatherResult::into_success)
                    .collect();

                if successes.is_empty() {
                    self.error = Some(NO_VALID_CITIES_MESSAGE.to_string());
                    self.results = None;
                } else {
                    self.results = Some(successes);
                    self.error = None;
                }
            }
            Err(e) => {
                error!(error = %e, "Error fetching weather data");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.results = None;
            }
        }

        self.loading = false;
    }

    /// Validate, issue one aggregate request, and apply its outcome
    pub async fn submit<T>(&mut self, transport: &T)
    where
        T: RelayTransport + ?Sized,
    {
        let Some(cities) = self.begin_submit() else {
            return;
        };

        let outcome = transport.fetch(&cities).await;
        self.complete(outcome);
    }

    /// Human-readable view of the current state
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(error) = &self.error {
            lines.push(error.clone());
        }

        if let Some(results) = &self.results {
            lines.push("Weather Information".to_string());
            lines.extend(results.iter().map(render_entry));
        }

        lines
    }
}

fn render_entry(weather: &CurrentWeather) -> String {
    format!(
        "{}: {}, Temperature: {}, Humidity: {}%",
        weather.city, weather.weather, weather.temperature, weather.humidity
    )
}
