//! Exercise filtering
//!
//! `name` matches as a case-insensitive substring, the other fields as
//! case-insensitive equality. Absent or blank criteria impose no constraint.

use std::collections::BTreeSet;

use super::entity::{Exercise, ExerciseField};

/// Field predicates applied to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    name: Option<String>,
    body_part: Option<String>,
    equipment: Option<String>,
    target: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw query pairs, ignoring unknown keys
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |criteria, (key, value)| {
                match ExerciseField::from_query_key(key) {
                    Some(field) => criteria.with(field, value),
                    None => criteria,
                }
            })
    }

    /// Set the constraint for a field; blank values clear it
    pub fn with(mut self, field: ExerciseField, value: impl Into<String>) -> Self {
        let value = normalize(value.into());
        match field {
            ExerciseField::Name => self.name = value,
            ExerciseField::BodyPart => self.body_part = value,
            ExerciseField::Equipment => self.equipment = value,
            ExerciseField::Target => self.target = value,
        }
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with(ExerciseField::Name, name)
    }

    pub fn with_body_part(self, body_part: impl Into<String>) -> Self {
        self.with(ExerciseField::BodyPart, body_part)
    }

    pub fn with_equipment(self, equipment: impl Into<String>) -> Self {
        self.with(ExerciseField::Equipment, equipment)
    }

    pub fn with_target(self, target: impl Into<String>) -> Self {
        self.with(ExerciseField::Target, target)
    }

    /// Constraint for a field, lowercased
    pub fn get(&self, field: ExerciseField) -> Option<&str> {
        match field {
            ExerciseField::Name => self.name.as_deref(),
            ExerciseField::BodyPart => self.body_part.as_deref(),
            ExerciseField::Equipment => self.equipment.as_deref(),
            ExerciseField::Target => self.target.as_deref(),
        }
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        ExerciseField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Check a single record against every active constraint
    pub fn matches(&self, exercise: &Exercise) -> bool {
        ExerciseField::ALL.iter().all(|field| match self.get(*field) {
            None => true,
            Some(expected) => {
                let actual = exercise.field(*field).to_lowercase();
                match field {
                    ExerciseField::Name => actual.contains(expected),
                    _ => actual == expected,
                }
            }
        })
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Every record satisfying `criteria`, in original order
pub fn filter_exercises<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Exercise>
where
    I: IntoIterator<Item = &'a Exercise>,
{
    records
        .into_iter()
        .filter(|exercise| criteria.matches(exercise))
        .collect()
}

/// Sorted distinct non-empty values of a field
pub fn distinct_values<'a, I>(records: I, field: ExerciseField) -> Vec<String>
where
    I: IntoIterator<Item = &'a Exercise>,
{
    records
        .into_iter()
        .map(|exercise| exercise.field(field))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Exercise> {
        vec![
            Exercise::new("0001", "3/4 sit-up", "waist", "body weight", "abs"),
            Exercise::new("0002", "push-up", "chest", "body weight", "pectorals"),
            Exercise::new("0003", "barbell bench press", "chest", "barbell", "pectorals"),
            Exercise::new("0004", "Barbell Curl", "upper arms", "barbell", "biceps"),
        ]
    }

    fn ids(records: &[&Exercise]) -> Vec<String> {
        records.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let records = sample();
        let criteria = FilterCriteria::new();

        assert!(criteria.is_empty());
        assert_eq!(filter_exercises(&records, &criteria).len(), records.len());
    }

    #[test]
    fn test_body_part_exact_match() {
        let records = sample();
        let criteria = FilterCriteria::new().with_body_part("chest");

        assert_eq!(ids(&filter_exercises(&records, &criteria)), vec!["0002", "0003"]);
    }

    #[test]
    fn test_body_part_is_not_substring() {
        let records = sample();
        let criteria = FilterCriteria::new().with_body_part("che");

        assert!(filter_exercises(&records, &criteria).is_empty());
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        let records = sample();
        let upper = filter_exercises(&records, &FilterCriteria::new().with_body_part("CHEST"));
        let lower = filter_exercises(&records, &FilterCriteria::new().with_body_part("chest"));

        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn test_name_substring_case_insensitive() {
        let records = sample();
        let criteria = FilterCriteria::new().with_name("BARBELL");

        assert_eq!(ids(&filter_exercises(&records, &criteria)), vec!["0003", "0004"]);
    }

    #[test]
    fn test_combined_criteria() {
        let records = sample();
        let criteria = FilterCriteria::new()
            .with_equipment("barbell")
            .with_target("pectorals");

        assert_eq!(ids(&filter_exercises(&records, &criteria)), vec!["0003"]);
    }

    #[test]
    fn test_blank_value_imposes_no_constraint() {
        let criteria = FilterCriteria::new().with_target("   ");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let criteria = FilterCriteria::from_pairs([
            ("bodyPart", "Chest"),
            ("limit", "5"),
            ("color", "red"),
        ]);

        assert_eq!(criteria, FilterCriteria::new().with_body_part("chest"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let all_criteria = [
            FilterCriteria::new(),
            FilterCriteria::new().with_name("bar"),
            FilterCriteria::new().with_body_part("chest"),
            FilterCriteria::new().with_equipment("body weight").with_name("up"),
            FilterCriteria::new().with_target("nothing"),
        ];

        for criteria in &all_criteria {
            let once = filter_exercises(&records, criteria);
            let twice = filter_exercises(once.clone(), criteria);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn test_distinct_values_sorted_and_deduplicated() {
        let mut records = sample();
        records.push(Exercise::new("0005", "plank", "", "body weight", "abs"));

        assert_eq!(
            distinct_values(&records, ExerciseField::BodyPart),
            vec!["chest", "upper arms", "waist"]
        );
        assert_eq!(
            distinct_values(&records, ExerciseField::Equipment),
            vec!["barbell", "body weight"]
        );
    }
}
