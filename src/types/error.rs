//! Unified Error Type System
//!
//! Centralized error types for the entire application, plus the classifier
//! that decides whether a model-call failure is recoverable by credential
//! rotation.
//!
//! ## Recovery policy
//!
//! - Credential faults (quota, rate limit, auth rejection) are recovered by
//!   rotating to the next credential inside one dispatch.
//! - Malformed model output is never an error: post-processing downgrades it
//!   to a fallback value.
//! - Everything else propagates to the pipeline, which halts the run and
//!   surfaces the message unmodified.

use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum AdforgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Model API Errors
    // -------------------------------------------------------------------------
    /// One model invocation failed. `status` is present when the failure came
    /// back as an HTTP response rather than a transport error.
    #[error("model API error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// Every distinct credential in the pool failed within a single dispatch.
    #[error("all {attempts} credentials failed; last error: {last}")]
    CredentialsExhausted { attempts: usize, last: String },

    /// A section ran out of validation retries.
    #[error("failed to generate {section} after {attempts} attempts: {message}")]
    Section {
        section: String,
        attempts: u32,
        message: String,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AdforgeError {
    /// Create a model API error without an HTTP status (transport failures).
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Create a model API error carrying the HTTP status of the response.
    pub fn api_status(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AdforgeError>;

// =============================================================================
// Error Classifier
// =============================================================================

/// HTTP statuses that indicate the credential, not the request, is at fault.
const CREDENTIAL_STATUSES: &[u16] = &[401, 403, 429];

/// Message fragments that indicate quota exhaustion, rate limiting, or an
/// invalid/unauthorized key. Matched case-insensitively against the error
/// text when no usable status code is available.
const CREDENTIAL_SIGNALS: &[&str] = &[
    "quota",
    "rate",
    "limit",
    "invalid",
    "api key",
    "unauthorized",
    "permission denied",
    "401",
    "403",
    "429",
];

/// Error classifier for rotation decisions
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Decide whether an error is credential-related, i.e. whether rotating
    /// to the next credential could fix it. Malformed requests, unrelated
    /// network timeouts, and server faults are not credential-related:
    /// rotating would not help, so they propagate unchanged.
    pub fn is_credential_fault(err: &AdforgeError) -> bool {
        match err {
            AdforgeError::Api { status, message } => {
                if let Some(code) = status {
                    return CREDENTIAL_STATUSES.contains(code);
                }
                Self::message_signals_credential(message)
            }
            _ => false,
        }
    }

    /// Fallback string classification for errors that carry no status code.
    fn message_signals_credential(message: &str) -> bool {
        let lower = message.to_lowercase();
        CREDENTIAL_SIGNALS.iter().any(|sig| lower.contains(sig))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        for code in [401u16, 403, 429] {
            let err = AdforgeError::api_status(code, "rejected");
            assert!(
                ErrorClassifier::is_credential_fault(&err),
                "status {code} should be a credential fault"
            );
        }

        let server_fault = AdforgeError::api_status(500, "internal error");
        assert!(!ErrorClassifier::is_credential_fault(&server_fault));

        let bad_request = AdforgeError::api_status(400, "malformed request");
        assert!(!ErrorClassifier::is_credential_fault(&bad_request));
    }

    #[test]
    fn test_status_beats_message_text() {
        // A 500 whose body happens to mention "rate" is still a server fault.
        let err = AdforgeError::api_status(500, "error rate elevated");
        assert!(!ErrorClassifier::is_credential_fault(&err));
    }

    #[test]
    fn test_message_classification() {
        let quota = AdforgeError::api("Quota exceeded for this project");
        assert!(ErrorClassifier::is_credential_fault(&quota));

        let key = AdforgeError::api("API key not valid");
        assert!(ErrorClassifier::is_credential_fault(&key));

        let rate = AdforgeError::api("Resource has been exhausted (e.g. check rate).");
        assert!(ErrorClassifier::is_credential_fault(&rate));

        let timeout = AdforgeError::api("connection timed out");
        assert!(!ErrorClassifier::is_credential_fault(&timeout));
    }

    #[test]
    fn test_non_api_errors_never_rotate() {
        let config = AdforgeError::config("no credentials configured");
        assert!(!ErrorClassifier::is_credential_fault(&config));

        let section = AdforgeError::Section {
            section: "Header".to_string(),
            attempts: 3,
            message: "too short".to_string(),
        };
        assert!(!ErrorClassifier::is_credential_fault(&section));
    }

    #[test]
    fn test_api_error_display() {
        let with_status = AdforgeError::api_status(429, "Too many requests");
        assert_eq!(
            with_status.to_string(),
            "model API error (429): Too many requests"
        );

        let without_status = AdforgeError::api("connection reset");
        assert_eq!(
            without_status.to_string(),
            "model API error: connection reset"
        );
    }
}
