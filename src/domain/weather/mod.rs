//! Weather domain - city queries, per-city results and the provider seam

mod city;
mod provider;
mod result;

pub use city::{parse_city_list, require_cities, CityQuery, MISSING_CITIES_MESSAGE};
pub use provider::{CurrentConditions, WeatherProvider};
pub use result::{CurrentWeather, FailedLookup, WeatherResult, FAILED_LOOKUP_MESSAGE};

#[cfg(test)]
pub use provider::mock;
