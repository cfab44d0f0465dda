//! Exercise catalog endpoints

use serde_json::Value;

use crate::api::types::{ApiError, QueryParams};
use crate::domain::{paginate, ExerciseField, FilterCriteria};
use crate::infrastructure::exercise::ExerciseCatalog;

/// `GET /exercises` with optional field filters
pub fn list_exercises(catalog: &ExerciseCatalog, query: &QueryParams) -> Result<Value, ApiError> {
    let matches = catalog.search(&query.filter_criteria());
    let page = paginate(matches, query.page_window());

    Ok(serde_json::to_value(page)?)
}

/// `GET /exercises/{field}List`
pub fn list_field_values(catalog: &ExerciseCatalog, field: ExerciseField) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(catalog.distinct(field))?)
}

/// `GET /exercises/{field}/{value}`
pub fn exercises_by_field(
    catalog: &ExerciseCatalog,
    field: ExerciseField,
    value: &str,
    query: &QueryParams,
) -> Result<Value, ApiError> {
    let criteria = FilterCriteria::new().with(field, value);
    let page = paginate(catalog.search(&criteria), query.page_window());

    Ok(serde_json::to_value(page)?)
}

/// `GET /exercises/exercise/{id}`
pub fn exercise_by_id(catalog: &ExerciseCatalog, id: &str) -> Result<Value, ApiError> {
    let exercise = catalog
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("Exercise not found"))?;

    Ok(serde_json::to_value(exercise)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ApiErrorKind;
    use crate::domain::Exercise;
    use serde_json::json;

    fn catalog() -> ExerciseCatalog {
        ExerciseCatalog::new(vec![
            Exercise::new("0001", "3/4 sit-up", "waist", "body weight", "abs"),
            Exercise::new("0002", "push-up", "chest", "body weight", "pectorals"),
            Exercise::new("0003", "barbell bench press", "chest", "barbell", "pectorals"),
        ])
    }

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_list_filters_and_paginates() {
        let value = list_exercises(&catalog(), &query(&[("bodyPart", "chest"), ("limit", "1")])).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["next"], "?limit=1&offset=1");
        assert_eq!(value["previous"], Value::Null);
        assert_eq!(value["results"][0]["id"], "0002");
    }

    #[test]
    fn test_list_without_filters_returns_everything() {
        let value = list_exercises(&catalog(), &QueryParams::default()).unwrap();

        assert_eq!(value["count"], 3);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
        assert_eq!(value["next"], Value::Null);
    }

    #[test]
    fn test_field_values() {
        let value = list_field_values(&catalog(), ExerciseField::Equipment).unwrap();
        assert_eq!(value, json!(["barbell", "body weight"]));
    }

    #[test]
    fn test_by_field_is_case_insensitive() {
        let value = exercises_by_field(&catalog(), ExerciseField::Target, "PECTORALS", &QueryParams::default()).unwrap();
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn test_by_name_matches_substring() {
        let value = exercises_by_field(&catalog(), ExerciseField::Name, "Bench", &QueryParams::default()).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["results"][0]["id"], "0003");
    }

    #[test]
    fn test_by_id() {
        let value = exercise_by_id(&catalog(), "0001").unwrap();
        assert_eq!(value["name"], "3/4 sit-up");
        assert_eq!(value["bodyPart"], "waist");

        let err = exercise_by_id(&catalog(), "9999").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message, "Exercise not found");
    }
}
