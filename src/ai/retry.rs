//! Retry with Response Validation
//!
//! Wraps a dispatch call for sections whose emptiness the dispatcher cannot
//! see: the call can succeed yet return a degenerate answer. Both thrown
//! failures and too-short responses count against the retry budget, with
//! linear backoff between thrown failures.
//!
//! This composes with the dispatcher's own credential rotation: every retry
//! iteration invokes the dispatch afresh, so a short-but-valid-credential
//! response and a long-but-exhausted-credential response are handled
//! independently.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use crate::constants::retry::BASE_DELAY_MS;
use crate::types::{AdforgeError, Result};

/// Invoke `op` until it yields a response of at least `min_chars` trimmed
/// characters, retrying up to `max_retries` times after the first attempt.
/// Exhausting the budget fails with an error naming the section.
pub async fn generate_with_retry<F, Fut>(
    section: &str,
    min_chars: usize,
    max_retries: u32,
    op: F,
) -> Result<String>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut last_error: Option<AdforgeError> = None;

    for attempt in 0..=max_retries {
        match op().await {
            Ok(text) => {
                if text.trim().len() >= min_chars {
                    return Ok(text);
                }
                // Semantic emptiness is a retry signal, not an exception.
                warn!(
                    section,
                    attempt = attempt + 1,
                    chars = text.trim().len(),
                    min_chars,
                    "Response too short, retrying"
                );
                last_error = Some(AdforgeError::api(format!(
                    "empty or too-short response for {section}"
                )));
            }
            Err(err) => {
                warn!(section, attempt = attempt + 1, error = %err, "Attempt failed");
                last_error = Some(err);
                if attempt < max_retries {
                    sleep(Duration::from_millis(
                        u64::from(attempt + 1) * BASE_DELAY_MS,
                    ))
                    .await;
                }
            }
        }
    }

    Err(AdforgeError::Section {
        section: section.to_string(),
        attempts: max_retries + 1,
        message: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt completed".to_string()),
    })
}

// =============================================================================
// Tests
// =============================================================================
