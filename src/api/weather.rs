//! Weather aggregation endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query};
use crate::domain::{require_cities, WeatherResult};

/// Query parameters for `GET /weather`
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub cities: Option<String>,
}

/// GET /weather?cities=Paris,London
///
/// Responds 200 with one entry per city in request order, even when every
/// lookup failed. A missing, empty or all-blank `cities` parameter is a 400.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Vec<WeatherResult>>, ApiError> {
    let cities = require_cities(query.cities.as_deref())?;

    debug!(count = cities.len(), "Aggregating weather");

    let results = state.weather_service.lookup_all(&cities).await;

    Ok(Json(results))
}
