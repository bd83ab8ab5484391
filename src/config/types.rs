//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/adforge/) and project (.adforge/) level
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Generative model settings
    pub model: ModelConfig,

    /// Saved-generation storage settings
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            model: ModelConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `AdforgeError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.model.name.trim().is_empty() {
            return Err(crate::types::AdforgeError::config(
                "model.name must not be empty",
            ));
        }

        if self.model.timeout_secs == 0 {
            return Err(crate::types::AdforgeError::config(
                "model.timeout_secs must be greater than 0",
            ));
        }

        if !self.model.api_base.starts_with("http") {
            return Err(crate::types::AdforgeError::config(format!(
                "model.api_base must be an http(s) URL, got '{}'",
                self.model.api_base
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Model Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model name sent to the generateContent endpoint
    pub name: String,

    /// API base URL (override for proxies or regional endpoints)
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: crate::constants::network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path for saved generations
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".adforge/generations.db"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model.name, "gemini-2.5-flash");
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.model.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.model.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_api_base() {
        let mut config = Config::default();
        config.model.api_base = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
