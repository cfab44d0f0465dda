//! Infrastructure layer - Storage, logging and metrics implementations

pub mod api_key;
pub mod exercise;
pub mod logging;
pub mod observability;
