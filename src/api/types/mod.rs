//! API request and response types

pub mod error;
pub mod query;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse};
pub use query::QueryParams;
