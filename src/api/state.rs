//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::api_key::ApiKeyService;
use crate::infrastructure::exercise::ExerciseCatalog;

use super::routes::RouteTable;

/// Application state shared by every request
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<ExerciseCatalog>,
    pub api_key_service: Arc<ApiKeyService>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    /// State serving the exercise API route table
    pub fn new(catalog: ExerciseCatalog, api_key_service: ApiKeyService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            api_key_service: Arc::new(api_key_service),
            routes: Arc::new(RouteTable::exercise_api()),
        }
    }
}
