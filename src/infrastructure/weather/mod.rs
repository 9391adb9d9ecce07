//! Weather provider implementations

mod http_client;
mod weatherapi;

pub use http_client::{HttpClient, HttpClientTrait};
pub use weatherapi::{WeatherApiProvider, DEFAULT_WEATHERAPI_BASE_URL};

#[cfg(test)]
pub use http_client::mock;
