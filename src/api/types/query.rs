//! Decoded query-string parameters

use axum::extract::Query;
use axum::http::Uri;

use crate::domain::{FilterCriteria, PageWindow};

use super::error::ApiError;

/// Query parameters in request order
///
/// Repeated keys keep their first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Decode the query string of `uri`
    pub fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|e| ApiError::bad_request(format!("Invalid query string: {}", e.body_text())))?;

        Ok(Self(pairs))
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lenient `limit`/`offset` window
    pub fn page_window(&self) -> PageWindow {
        PageWindow::parse(self.get("limit"), self.get("offset"))
    }

    /// Field filters; unknown keys are ignored
    pub fn filter_criteria(&self) -> FilterCriteria {
        let mut seen = std::collections::HashSet::new();
        FilterCriteria::from_pairs(self.pairs().filter(|(k, _)| seen.insert(*k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(uri: &str) -> QueryParams {
        QueryParams::from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
    }

    #[test]
    fn test_decodes_values() {
        let query = params("/exercises?name=3%2F4%20sit-up&bodyPart=upper+arms");

        assert_eq!(query.get("name"), Some("3/4 sit-up"));
        assert_eq!(query.get("bodyPart"), Some("upper arms"));
        assert_eq!(query.get("target"), None);
    }

    #[test]
    fn test_empty_query() {
        let query = params("/exercises");
        assert_eq!(query, QueryParams::default());
        assert_eq!(query.page_window(), PageWindow::default());
    }

    #[test]
    fn test_first_value_wins() {
        let query = params("/exercises?bodyPart=chest&bodyPart=waist");

        assert_eq!(query.get("bodyPart"), Some("chest"));
        assert_eq!(
            query.filter_criteria(),
            FilterCriteria::new().with_body_part("chest")
        );
    }

    #[test]
    fn test_page_window() {
        let query = params("/exercises?limit=5&offset=abc");
        assert_eq!(query.page_window(), PageWindow::new(5, 0));
    }

    #[test]
    fn test_filter_criteria_ignores_unknown_keys() {
        let query = params("/exercises?equipment=Barbell&apiKey=secret&limit=2");
        assert_eq!(
            query.filter_criteria(),
            FilterCriteria::new().with_equipment("barbell")
        );
    }
}
