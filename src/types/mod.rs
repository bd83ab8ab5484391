//! Core type definitions shared across the crate.

pub mod error;
pub mod form;

pub use error::{AdforgeError, ErrorClassifier, Result};
pub use form::{
    AdFormData, AdType, AssetStore, Attachment, AttireType, DurationPackage, GenerationBundle,
};
