//! API Key infrastructure implementations
//!
//! This module provides token generation, the key store service and its
//! file-backed and in-memory repositories.

mod file_repository;
mod generator;
mod repository;
mod service;

pub use file_repository::FileApiKeyRepository;
pub use generator::ApiKeyGenerator;
pub use repository::InMemoryApiKeyRepository;
pub use service::ApiKeyService;
