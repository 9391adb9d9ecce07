use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{cors_layer, logging_middleware, panic_response};
use super::state::AppState;
use super::weather;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Aggregate weather lookup
        .route("/weather", get(weather::get_weather))
        .with_state(state);

    with_layers(routes)
}

/// Wrap a router in the standard middleware stack.
/// CORS is outermost so error and panic responses carry the header too.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
