//! Exercise Catalog API
//!
//! A read-only catalog of exercises served over HTTP with:
//! - Field filtering and offset pagination
//! - Opaque API keys issued on demand and persisted to a flat JSON file
//! - An ordered route table with exact and prefix routes

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::state::AppState;
use infrastructure::{
    api_key::{ApiKeyService, FileApiKeyRepository},
    exercise::ExerciseCatalog,
};
use tracing::info;

/// Create the application state with custom configuration
///
/// Fails only when the exercise dataset cannot be loaded.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let catalog = ExerciseCatalog::load(&config.data.exercises_path)
        .await
        .with_context(|| {
            format!(
                "failed to load exercise dataset from {}",
                config.data.exercises_path.display()
            )
        })?;

    let repository = Arc::new(FileApiKeyRepository::new(&config.api_keys.store_path));
    let api_key_service = ApiKeyService::load(repository).await;

    info!(
        exercises = catalog.len(),
        api_keys = api_key_service.len().await,
        "Application state initialized"
    );

    Ok(AppState::new(catalog, api_key_service))
}
