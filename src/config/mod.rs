//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, EnvOverrides, LogFormat, LoggingConfig, ServerConfig, WeatherConfig,
    MISSING_API_KEY_MESSAGE,
};
