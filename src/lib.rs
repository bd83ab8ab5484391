//! Adforge - AI-Driven Ad-Creative Prompt Generator
//!
//! Collects business assets and campaign configuration, then orchestrates a
//! sequence of generative-model calls to produce a bundle of marketing
//! prompt artifacts: image prompts, a voice-over script, video-segment
//! prompts, a poster design, and on-demand stock-image prompts.
//!
//! ## Core Features
//!
//! - **Credential Rotation**: multi-key pool with automatic fallback on
//!   quota, rate-limit, and auth failures
//! - **Validation Retry**: semantically-empty responses retried
//!   independently of credential rotation
//! - **Partial-Failure Recovery**: malformed model JSON degrades to usable
//!   fallback values instead of aborting the run
//! - **Two Creation Modes**: full pipeline and extraction-only
//! - **Saved Generations**: SQLite-backed save/list/refine/delete
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use adforge::{CredentialPool, Dispatcher, Pipeline};
//! use adforge::pipeline::NullSink;
//!
//! let pool = Arc::new(CredentialPool::from_env()?);
//! let dispatcher = Arc::new(Dispatcher::new(pool, &config.model)?);
//! let pipeline = Pipeline::new(dispatcher, Arc::new(NullSink));
//! let bundle = pipeline.generate(&form, &assets).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: credential pool, dispatcher, retry wrapper, post-processing
//! - [`pipeline`]: generation orchestrator and progress reporting
//! - [`prompts`]: section kinds and prompt-template library
//! - [`storage`]: SQLite persistence for saved generations
//! - [`config`]: layered configuration

pub mod ai;
pub mod assets;
pub mod cli;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod prompts;
pub mod storage;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, ModelConfig, StorageConfig};

// Error Types
pub use types::{AdforgeError, ErrorClassifier, Result};

// Storage
pub use storage::{Database, SavedGeneration, SharedDatabase};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use pipeline::{Pipeline, ProgressSink};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    CredentialPool,
    Dispatcher,
    GeminiClient,
    ModelRequest,
    SharedGenerator,
    TextGenerator,
    generate_with_retry,
};

// =============================================================================
// Domain Re-exports
// =============================================================================

pub use prompts::{SectionKind, StockTheme};
pub use types::{AdFormData, AdType, AssetStore, AttireType, DurationPackage, GenerationBundle};
