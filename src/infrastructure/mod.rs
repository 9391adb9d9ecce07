//! Infrastructure layer - provider clients, services and logging

pub mod logging;
pub mod services;
pub mod weather;
