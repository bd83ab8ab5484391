//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/adforge/config.toml)
//! 3. Project config (.adforge/config.toml)
//! 4. Environment variables (ADFORGE_*)
//!
//! Credentials are deliberately NOT part of this surface; they are loaded
//! from numbered environment slots by the credential pool.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
