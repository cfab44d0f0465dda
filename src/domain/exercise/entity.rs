//! Exercise entity and searchable fields

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One exercise catalog entry
///
/// Only the four searchable attributes and the id are interpreted. Any other
/// field present in the dataset is carried through untouched in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    body_part: String,
    #[serde(default)]
    equipment: String,
    #[serde(default)]
    target: String,
    #[serde(flatten)]
    details: Map<String, Value>,
}

impl Exercise {
    /// Create a new exercise without extra details
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        body_part: impl Into<String>,
        equipment: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body_part: body_part.into(),
            equipment: equipment.into(),
            target: target.into(),
            details: Map::new(),
        }
    }

    /// Attach an opaque descriptive field
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body_part(&self) -> &str {
        &self.body_part
    }

    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Value of a searchable field
    pub fn field(&self, field: ExerciseField) -> &str {
        match field {
            ExerciseField::Name => &self.name,
            ExerciseField::BodyPart => &self.body_part,
            ExerciseField::Equipment => &self.equipment,
            ExerciseField::Target => &self.target,
        }
    }
}

/// Searchable exercise attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseField {
    Name,
    BodyPart,
    Equipment,
    Target,
}

impl ExerciseField {
    pub const ALL: [ExerciseField; 4] = [
        ExerciseField::Name,
        ExerciseField::BodyPart,
        ExerciseField::Equipment,
        ExerciseField::Target,
    ];

    /// Wire name used in JSON and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BodyPart => "bodyPart",
            Self::Equipment => "equipment",
            Self::Target => "target",
        }
    }

    /// Resolve a query-string key; unknown keys yield `None`
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl std::fmt::Display for ExerciseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
