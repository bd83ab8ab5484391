//! Credential Pool
//!
//! An ordered list of API credentials with a single mutable rotation cursor.
//! The cursor is pool-wide: rotation caused by one dispatch is visible to
//! every later call, so the process settles on a working credential instead
//! of re-discovering dead ones. The pool is an explicit object shared via
//! `Arc`, never a module-level global.

use std::sync::{Mutex, PoisonError};

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::constants::credentials::{KEY_SLOT_PREFIX, LEGACY_KEY_VAR, MAX_KEY_SLOTS};
use crate::types::{AdforgeError, Result};

pub struct CredentialPool {
    keys: Vec<SecretString>,
    cursor: Mutex<usize>,
}

impl std::fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPool")
            .field("size", &self.keys.len())
            .field("cursor", &self.cursor())
            .finish()
    }
}

impl CredentialPool {
    /// Build a pool from raw values, excluding blank entries and preserving
    /// order. Fails when nothing usable remains.
    pub fn load<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let keys: Vec<SecretString> = raw
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .map(SecretString::from)
            .collect();

        if keys.is_empty() {
            return Err(AdforgeError::config(format!(
                "No API credentials configured. Set {KEY_SLOT_PREFIX}1, {KEY_SLOT_PREFIX}2, \
                 ... (or {LEGACY_KEY_VAR}) in your environment."
            )));
        }

        info!(credentials = keys.len(), "Credential pool loaded");

        Ok(Self {
            keys,
            cursor: Mutex::new(0),
        })
    }

    /// Load from the numbered environment slots, falling back to the legacy
    /// single-credential slot only when every numbered slot is blank or
    /// missing.
    pub fn from_env() -> Result<Self> {
        let mut raw: Vec<String> = (1..=MAX_KEY_SLOTS)
            .filter_map(|n| std::env::var(format!("{KEY_SLOT_PREFIX}{n}")).ok())
            .filter(|k| !k.trim().is_empty())
            .collect();

        if raw.is_empty()
            && let Ok(legacy) = std::env::var(LEGACY_KEY_VAR)
            && !legacy.trim().is_empty()
        {
            raw.push(legacy);
        }

        Self::load(raw)
    }

    /// Number of usable credentials.
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        *self
            .cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The credential attempted next, with its pool position.
    pub fn current(&self) -> (usize, SecretString) {
        let index = self.cursor();
        let key = SecretString::from(self.keys[index].expose_secret().to_owned());
        (index, key)
    }

    /// Advance the cursor to the next credential, wrapping silently to the
    /// first after the last. A full cycle is logged, not treated as an
    /// error: the pool is round-robin, not a dead-letter queue.
    pub fn rotate(&self) {
        let mut cursor = self
            .cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let from = *cursor;
        let next = (from + 1) % self.keys.len();

        if next == 0 && from != 0 {
            warn!(
                credentials = self.keys.len(),
                "All credentials have been tried; starting over from the first"
            );
        } else {
            debug!(
                from = from + 1,
                to = next + 1,
                total = self.keys.len(),
                "Rotated to next credential"
            );
        }

        *cursor = next;
    }
}

// =============================================================================
// Tests
// =============================================================================
