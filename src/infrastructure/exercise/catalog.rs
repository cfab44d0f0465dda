//! Immutable in-memory exercise catalog
//!
//! Loaded once at startup from a JSON array and never modified afterwards,
//! so it is shared between requests without locking.

use std::path::Path;

use tracing::info;

use crate::domain::exercise::{distinct_values, filter_exercises, Exercise, ExerciseField, FilterCriteria};
use crate::domain::DomainError;

/// The record store
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// Create a catalog from already loaded records
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// Parse a JSON array of exercise records
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let exercises: Vec<Exercise> = serde_json::from_str(json)
            .map_err(|e| DomainError::dataset(format!("Invalid exercise dataset: {}", e)))?;

        Ok(Self::new(exercises))
    }

    /// Load the dataset file at `path`
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::dataset(format!(
                "Failed to read exercise dataset '{}': {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            exercises = catalog.len(),
            "Exercise dataset loaded"
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Records matching `criteria`, in dataset order
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Exercise> {
        filter_exercises(&self.exercises, criteria)
    }

    /// First record with exactly this id
    pub fn find_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id() == id)
    }

    /// Sorted distinct values of a field
    pub fn distinct(&self, field: ExerciseField) -> Vec<String> {
        distinct_values(&self.exercises, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"id": "0001", "name": "3/4 sit-up", "bodyPart": "waist", "equipment": "body weight", "target": "abs"},
        {"id": "0002", "name": "push-up", "bodyPart": "chest", "equipment": "body weight", "target": "pectorals"},
        {"id": "0002", "name": "duplicate push-up", "bodyPart": "chest", "equipment": "body weight", "target": "pectorals"}
    ]"#;

    #[test]
    fn test_from_json_str() {
        let catalog = ExerciseCatalog::from_json_str(DATASET).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_invalid_dataset() {
        let result = ExerciseCatalog::from_json_str(r#"{"id": "0001"}"#);
        assert!(matches!(result, Err(DomainError::Dataset { .. })));
    }

    #[test]
    fn test_find_by_id_returns_first() {
        let catalog = ExerciseCatalog::from_json_str(DATASET).unwrap();

        assert_eq!(catalog.find_by_id("0002").unwrap().name(), "push-up");
        assert!(catalog.find_by_id("9999").is_none());
    }

    #[test]
    fn test_search() {
        let catalog = ExerciseCatalog::from_json_str(DATASET).unwrap();
        let results = catalog.search(&FilterCriteria::new().with_body_part("waist"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "0001");
    }

    #[test]
    fn test_distinct() {
        let catalog = ExerciseCatalog::from_json_str(DATASET).unwrap();
        assert_eq!(catalog.distinct(ExerciseField::Target), vec!["abs", "pectorals"]);
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let catalog =
            ExerciseCatalog::from_json_str(include_str!("../../../data/exercises.json")).unwrap();

        assert!(!catalog.is_empty());
        assert!(catalog.all().iter().all(|e| !e.id().is_empty()));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExerciseCatalog::load(dir.path().join("missing.json")).await;

        assert!(matches!(result, Err(DomainError::Dataset { .. })));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exercises.json");
        std::fs::write(&path, DATASET).unwrap();

        let catalog = ExerciseCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }
}
