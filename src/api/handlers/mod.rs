//! Endpoint handlers invoked by the dispatcher

pub mod docs;
pub mod exercises;
pub mod keys;
