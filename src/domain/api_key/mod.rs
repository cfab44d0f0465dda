//! API Key domain
//!
//! Issued keys, their persisted form, and the persistence trait the key
//! store writes through.

mod entity;
mod repository;

pub use entity::{ApiKey, ApiKeyMap, ApiKeyMetadata};
pub use repository::ApiKeyRepository;
