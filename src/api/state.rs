//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::WeatherService;

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    pub fn new(weather_service: WeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
