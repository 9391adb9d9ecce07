//! Domain layer - Core business logic and entities

pub mod error;
pub mod weather;

pub use error::DomainError;
pub use weather::{
    parse_city_list, require_cities, CityQuery, CurrentConditions, CurrentWeather, FailedLookup,
    WeatherProvider, WeatherResult, FAILED_LOOKUP_MESSAGE, MISSING_CITIES_MESSAGE,
};
