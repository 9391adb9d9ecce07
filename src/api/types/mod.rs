//! HTTP API types

pub mod error;
pub mod query;

pub use error::{ApiError, ErrorBody, INTERNAL_ERROR_MESSAGE};
pub use query::Query;
