//! API middleware components

pub mod cors;
pub mod logging;
pub mod panic;

pub use cors::cors_layer;
pub use logging::logging_middleware;
pub use panic::panic_response;
