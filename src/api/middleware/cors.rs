//! Cross-origin policy

use tower_http::cors::{Any, CorsLayer};

/// Wildcard `Access-Control-Allow-Origin` on every response
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any)
}
