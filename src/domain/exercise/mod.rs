//! Exercise domain
//!
//! Exercise records, field predicates and the pure query functions run
//! against the immutable catalog.

mod entity;
mod filter;

pub use entity::{Exercise, ExerciseField};
pub use filter::{distinct_values, filter_exercises, FilterCriteria};
