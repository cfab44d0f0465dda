//! Exercise record store

mod catalog;

pub use catalog::ExerciseCatalog;
