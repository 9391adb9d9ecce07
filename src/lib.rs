//! Weather Relay
//!
//! Fans a comma-separated city list out to a weather provider and returns
//! the per-city results as one JSON array:
//! - `GET /weather?cities=...` relay with per-city failure isolation
//! - weatherapi.com provider over reqwest
//! - a form controller and relay client for the lookup side

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::services::WeatherService;
use infrastructure::weather::{HttpClient, WeatherApiProvider};
use tracing::info;

/// Create the application state from configuration.
///
/// Fails when the weather API key is missing.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = config.weather.require_api_key()?;

    let http_client = match config.weather.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };

    let provider = WeatherApiProvider::with_base_url(
        http_client,
        api_key,
        config.weather.base_url.clone(),
    );

    info!(base_url = %config.weather.base_url, "Weather provider configured");

    Ok(AppState::new(WeatherService::new(Arc::new(provider))))
}
