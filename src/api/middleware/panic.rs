//! Conversion of handler panics into the generic 500 body

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::api::types::ApiError;

/// Response for `CatchPanicLayer::custom`
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    ApiError::internal().into_response()
}
