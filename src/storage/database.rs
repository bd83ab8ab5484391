//! Database Layer with Connection Pooling
//!
//! SQLite persistence for saved generations:
//! - Connection pooling via r2d2
//! - WAL mode for read/write performance
//! - Schema applied idempotently at open

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use uuid::Uuid;

use crate::types::{AdFormData, AdType, AdforgeError, AttireType, DurationPackage,
    GenerationBundle, Result};

/// Shared database handle for async contexts.
pub type SharedDatabase = Arc<Database>;

const SCHEMA: &str = include_str!("schema.sql");

/// One persisted generation run.
#[derive(Debug, Clone)]
pub struct SavedGeneration {
    pub id: String,
    pub owner: String,
    pub business_name: String,
    pub business_type: String,
    pub form: AdFormData,
    pub bundle: GenerationBundle,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            Ok(())
        });
        Self::from_manager(manager)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        // A single connection keeps the in-memory database alive and shared.
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| AdforgeError::Storage(format!("pool init failed: {e}")))?;
        let db = Self { pool };
        db.initialize()?;
        Ok(db)
    }

    fn from_manager(manager: SqliteConnectionManager) -> Result<Self> {
        let pool = Pool::builder()
            .max_size(4)
            .build(manager)
            .map_err(|e| AdforgeError::Storage(format!("pool init failed: {e}")))?;
        let db = Self { pool };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<()> {
        self.connection()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| AdforgeError::Storage(format!("connection acquire failed: {e}")))
    }

    // =========================================================================
    // Generations
    // =========================================================================

    /// Persist a completed run. Returns the new generation id.
    pub fn save_generation(
        &self,
        owner: &str,
        form: &AdFormData,
        bundle: &GenerationBundle,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        self.connection()?.execute(
            "INSERT INTO generations
             (id, owner, business_name, business_type, ad_type, festival_name, attire,
              duration, bundle, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                id,
                owner,
                bundle.business_name(),
                bundle.business_type(),
                form.ad_type.as_str(),
                form.festival_name,
                form.attire.as_str(),
                form.duration.seconds(),
                serde_json::to_string(bundle)?,
                created_at,
            ],
        )?;

        Ok(id)
    }

    /// List an owner's saved generations, newest first.
    pub fn list_generations(&self, owner: &str) -> Result<Vec<SavedGeneration>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, business_name, business_type, ad_type, festival_name,
                    attire, duration, bundle, created_at
             FROM generations
             WHERE owner = ?1
             ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![owner], row_to_generation)?;
        let mut generations = Vec::new();
        for row in rows {
            generations.push(row?);
        }
        Ok(generations)
    }

    /// Load one generation by id.
    pub fn load_generation(&self, id: &str) -> Result<SavedGeneration> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, owner, business_name, business_type, ad_type, festival_name,
                    attire, duration, bundle, created_at
             FROM generations
             WHERE id = ?1",
        )?;

        stmt.query_row(params![id], row_to_generation)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    AdforgeError::Storage(format!("no saved generation with id {id}"))
                }
                other => other.into(),
            })
    }

    /// Replace the stored bundle of an existing generation (after refinement
    /// or stock-image population).
    pub fn update_bundle(&self, id: &str, bundle: &GenerationBundle) -> Result<()> {
        let updated = self.connection()?.execute(
            "UPDATE generations
             SET bundle = ?2, business_name = ?3, business_type = ?4
             WHERE id = ?1",
            params![
                id,
                serde_json::to_string(bundle)?,
                bundle.business_name(),
                bundle.business_type(),
            ],
        )?;

        if updated == 0 {
            return Err(AdforgeError::Storage(format!(
                "no saved generation with id {id}"
            )));
        }
        Ok(())
    }

    /// Delete a saved generation.
    pub fn delete_generation(&self, id: &str) -> Result<()> {
        self.connection()?
            .execute("DELETE FROM generations WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_generation(row: &rusqlite::Row<'_>) -> rusqlite::Result<SavedGeneration> {
    let ad_type: String = row.get(4)?;
    let festival_name: Option<String> = row.get(5)?;
    let attire: String = row.get(6)?;
    let duration: u32 = row.get(7)?;
    let bundle_json: String = row.get(8)?;

    let parse_col = |idx: usize, msg: String| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            msg.into(),
        )
    };

    let form = AdFormData {
        ad_type: match ad_type.as_str() {
            "festival" => AdType::Festival,
            _ => AdType::Commercial,
        },
        festival_name: festival_name.unwrap_or_default(),
        attire: match attire.as_str() {
            "professional" => AttireType::Professional,
            _ => AttireType::Traditional,
        },
        duration: DurationPackage::try_from(duration)
            .map_err(|e| parse_col(7, e.to_string()))?,
        text_instructions: String::new(),
    };

    let bundle: GenerationBundle = serde_json::from_str(&bundle_json)
        .map_err(|e| parse_col(8, format!("corrupt bundle JSON: {e}")))?;

    Ok(SavedGeneration {
        id: row.get(0)?,
        owner: row.get(1)?,
        business_name: row.get(2)?,
        business_type: row.get(3)?,
        form,
        bundle,
        created_at: row.get(9)?,
    })
}

// =============================================================================
// Tests
// =============================================================================
