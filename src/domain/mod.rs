//! Domain layer - Core entities and pure query logic

pub mod api_key;
pub mod error;
pub mod exercise;
pub mod pagination;

pub use api_key::{ApiKey, ApiKeyMap, ApiKeyMetadata, ApiKeyRepository};
pub use error::DomainError;
pub use exercise::{distinct_values, filter_exercises, Exercise, ExerciseField, FilterCriteria};
pub use pagination::{paginate, Page, PageWindow, DEFAULT_LIMIT, DEFAULT_OFFSET};
