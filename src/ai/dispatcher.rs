//! Call-with-Fallback Dispatcher
//!
//! Executes one logical model invocation against whichever credential
//! currently works, transparently retrying with the next credential on
//! credential-related failure.
//!
//! ## Strategy
//!
//! 1. Bind a client to the pool's current credential
//! 2. Invoke the caller-supplied operation
//! 3. On success, return immediately (no further rotation)
//! 4. On a credential fault, rotate and retry after a fixed backoff
//! 5. Once every distinct credential has failed within this dispatch,
//!    give up with `CredentialsExhausted`
//! 6. Any non-credential error propagates unchanged: rotating would not
//!    fix a malformed request or an unrelated network fault
//!
//! Rotation state lives in the shared pool and persists across dispatches;
//! the exhaustion check is scoped to one dispatch via a tried-index set.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use super::client::GeminiClient;
use super::credentials::CredentialPool;
use super::request::ModelRequest;
use crate::config::ModelConfig;
use crate::constants::dispatch::ROTATION_BACKOFF_MS;
use crate::types::{AdforgeError, ErrorClassifier, Result};

/// The single-logical-call seam the pipeline talks to. Mock implementations
/// stand in for the whole credential/HTTP stack in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: ModelRequest) -> Result<String>;
}

/// Shared generator handle used across pipeline operations.
pub type SharedGenerator = Arc<dyn TextGenerator>;

/// Dispatcher binding the credential pool to the model API.
pub struct Dispatcher {
    pool: Arc<CredentialPool>,
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl Dispatcher {
    pub fn new(pool: Arc<CredentialPool>, model: &ModelConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(model.timeout_secs))
            .build()
            .map_err(|e| AdforgeError::api(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            pool,
            http,
            api_base: model.api_base.clone(),
            model: model.name.clone(),
        })
    }

    /// The pool this dispatcher rotates. Exposed so callers can inspect the
    /// cursor (e.g. status output).
    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    /// Build a client bound to the pool's current credential.
    fn bind_client(&self) -> GeminiClient {
        let (ordinal, key) = self.pool.current();
        GeminiClient::new(
            self.http.clone(),
            self.api_base.clone(),
            self.model.clone(),
            ordinal,
            key,
        )
    }

    /// Execute `op` with automatic credential rotation on credential-related
    /// failure, bounded by the pool size.
    pub async fn call_with_fallback<T, F, Fut>(&self, op: F) -> Result<T>
    where
        T: Send,
        F: Fn(GeminiClient) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        if self.pool.size() == 0 {
            return Err(AdforgeError::config("no credentials configured"));
        }

        let mut tried: HashSet<usize> = HashSet::new();
        let mut last_error: Option<AdforgeError> = None;

        for attempt in 1..=self.pool.size() {
            let client = self.bind_client();
            let ordinal = client.ordinal();

            debug!(
                attempt,
                credential = ordinal + 1,
                total = self.pool.size(),
                "Dispatch attempt"
            );

            match op(client).await {
                Ok(value) => return Ok(value),
                Err(err) if ErrorClassifier::is_credential_fault(&err) => {
                    warn!(
                        credential = ordinal + 1,
                        total = self.pool.size(),
                        error = %err,
                        "Credential rejected, trying next"
                    );

                    tried.insert(ordinal);
                    // Rotating to oneself is a no-op; skip it so a one-entry
                    // pool exhausts without touching the cursor.
                    if self.pool.size() > 1 {
                        self.pool.rotate();
                    }

                    if tried.len() >= self.pool.size() {
                        error!(credentials = tried.len(), "All credentials exhausted");
                        return Err(AdforgeError::CredentialsExhausted {
                            attempts: tried.len(),
                            last: err.to_string(),
                        });
                    }

                    last_error = Some(err);
                    sleep(Duration::from_millis(ROTATION_BACKOFF_MS)).await;
                }
                Err(err) => return Err(err),
            }
        }

        // Reachable only if a concurrent run rotated the pool under us and we
        // kept landing on already-tried credentials until the attempt bound.
        Err(last_error
            .unwrap_or_else(|| AdforgeError::api("dispatch ended without an attempt")))
    }
}

#[async_trait]
impl TextGenerator for Dispatcher {
    async fn generate(&self, request: ModelRequest) -> Result<String> {
        self.call_with_fallback(|client| {
            let request = request.clone();
            async move { client.generate(&request).await }
        })
        .await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dispatcher(n: usize) -> Dispatcher {
        let pool = Arc::new(
            CredentialPool::load((0..n).map(|i| format!("key-{i}"))).unwrap(),
        );
        Dispatcher::new(pool, &ModelConfig::default()).unwrap()
    }

    fn quota_error() -> AdforgeError {
        AdforgeError::api_status(429, "quota exceeded for this credential")
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_returns_without_rotation() {
        let dispatcher = dispatcher(3);
        let attempts = AtomicUsize::new(0);

        let result = dispatcher
            .call_with_fallback(|client| {
                attempts.fetch_add(1, Ordering::SeqCst);
                let ordinal = client.ordinal();
                async move { Ok(format!("from credential {ordinal}")) }
            })
            .await
            .unwrap();

        assert_eq!(result, "from credential 0");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.pool().cursor(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_credentials_fail_exhausts_after_n_attempts() {
        // Every credential fails exactly once; the dispatch exhausts after
        // exactly N attempts and the cursor comes back to its start.
        let dispatcher = dispatcher(3);
        let attempts = AtomicUsize::new(0);

        let err = dispatcher
            .call_with_fallback(|_client| {
                attempts.fetch_add(1, Ordering::SeqCst);
                async move { Err::<String, _>(quota_error()) }
            })
            .await
            .unwrap_err();

        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(dispatcher.pool().cursor(), 0);
        match err {
            AdforgeError::CredentialsExhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(last.contains("quota"));
            }
            other => panic!("expected exhaustion, got {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_credential_exhausts_immediately() {
        let dispatcher = dispatcher(1);
        let attempts = AtomicUsize::new(0);

        let err = dispatcher
            .call_with_fallback(|_client| {
                attempts.fetch_add(1, Ordering::SeqCst);
                async move { Err::<String, _>(quota_error()) }
            })
            .await
            .unwrap_err();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.pool().cursor(), 0);
        assert!(matches!(
            err,
            AdforgeError::CredentialsExhausted { attempts: 1, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_credential_error_propagates_without_rotation() {
        let dispatcher = dispatcher(3);
        let attempts = AtomicUsize::new(0);

        let err = dispatcher
            .call_with_fallback(|_client| {
                attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    Err::<String, _>(AdforgeError::api_status(500, "backend overloaded"))
                }
            })
            .await
            .unwrap_err();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.pool().cursor(), 0);
        assert!(matches!(
            err,
            AdforgeError::Api {
                status: Some(500),
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_settles_on_working_credential() {
        let dispatcher = dispatcher(3);

        let result = dispatcher
            .call_with_fallback(|client| {
                let ordinal = client.ordinal();
                async move {
                    if ordinal == 0 {
                        Err(quota_error())
                    } else {
                        Ok(format!("ok from {ordinal}"))
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(result, "ok from 1");
        // The pool stays on the credential that worked.
        assert_eq!(dispatcher.pool().cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotation_persists_across_dispatches() {
        let dispatcher = dispatcher(3);

        // First dispatch burns credential 0 and settles on 1.
        dispatcher
            .call_with_fallback(|client| {
                let ordinal = client.ordinal();
                async move {
                    if ordinal == 0 {
                        Err(quota_error())
                    } else {
                        Ok(ordinal)
                    }
                }
            })
            .await
            .unwrap();

        // Second dispatch starts directly on credential 1.
        let attempts = AtomicUsize::new(0);
        let first = dispatcher
            .call_with_fallback(|client| {
                attempts.fetch_add(1, Ordering::SeqCst);
                let ordinal = client.ordinal();
                async move { Ok(ordinal) }
            })
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
