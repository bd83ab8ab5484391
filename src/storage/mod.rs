//! Persistence Layer
//!
//! Pooled SQLite storage for saved generations.

pub mod database;

pub use database::{Database, SavedGeneration, SharedDatabase};
