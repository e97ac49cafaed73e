//! Persistence gateway: load/save of profile documents keyed by session id.
//!
//! Saves merge the payload into any previously stored document instead of
//! replacing fields not present in it, the contract a document store gives
//! a merge-write. Overlapping saves have no defined ordering; the last write
//! issued wins eventually. The in-memory record stays the working copy, so a
//! failed save only degrades durability.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::profile::record::ProfileRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable")]
    Unavailable,
}

/// The persistence gateway trait. Carried in `AppState` as `Arc<dyn ProfileStore>`
/// so the backing document store can be swapped without touching handlers.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetches the stored document for a session, if any. Fields absent from
    /// the document deserialize to their defaults.
    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileRecord>, StoreError>;

    /// Persists the full record, merging over any previously stored fields.
    /// Safe to call repeatedly and concurrently.
    async fn save(&self, session_id: Uuid, record: &ProfileRecord) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store: one JSONB document per session, merged on write
/// with the `||` operator.
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileRecord>, StoreError> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT data FROM profiles WHERE session_id = $1")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((data,)) => Ok(Some(serde_json::from_value(data)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session_id: Uuid, record: &ProfileRecord) -> Result<(), StoreError> {
        let data = serde_json::to_value(record)?;
        sqlx::query(
            r#"
            INSERT INTO profiles (session_id, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (session_id)
            DO UPDATE SET data = profiles.data || EXCLUDED.data, updated_at = NOW()
            "#,
        )
        .bind(session_id)
        .bind(&data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// In-memory store mirroring the shallow field-merge semantics of the JSONB
/// upsert. Backs tests and save-failure injection.
#[derive(Default)]
pub struct InMemoryProfileStore {
    documents: RwLock<HashMap<Uuid, Value>>,
    fail_saves: AtomicBool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent saves fail with `StoreError::Unavailable`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Seeds a raw document, bypassing the record type. Used to model
    /// documents written by older schema versions.
    pub async fn seed_document(&self, session_id: Uuid, document: Value) {
        self.documents.write().await.insert(session_id, document);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileRecord>, StoreError> {
        match self.documents.read().await.get(&session_id) {
            Some(document) => Ok(Some(serde_json::from_value(document.clone())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session_id: Uuid, record: &ProfileRecord) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        let overlay = serde_json::to_value(record)?;
        let mut documents = self.documents.write().await;
        let slot = documents
            .entry(session_id)
            .or_insert_with(|| Value::Object(Default::default()));
        merge_fields(slot, overlay);
        Ok(())
    }
}

/// Top-level field overlay, the same shape as `jsonb || jsonb`.
fn merge_fields(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                base_map.insert(key, value);
            }
        }
        (slot, overlay) => *slot = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_absent_session_is_none() {
        let store = InMemoryProfileStore::new();
        assert!(store.load(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        let mut record = ProfileRecord::default();
        record.branch = "Computer Science".to_string();
        record.toggle_skill("Python");

        store.save(session_id, &record).await.unwrap();
        let loaded = store.load(session_id).await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_partial_document_loads_over_defaults() {
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        store
            .seed_document(session_id, json!({ "branch": "ECE", "targetRoles": ["se"] }))
            .await;

        let loaded = store.load(session_id).await.unwrap().unwrap();
        assert_eq!(loaded.branch, "ECE");
        assert!(loaded.target_companies.is_empty());
    }

    #[tokio::test]
    async fn test_save_merges_into_seeded_document() {
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        store
            .seed_document(session_id, json!({ "legacyField": "kept" }))
            .await;

        store
            .save(session_id, &ProfileRecord::default())
            .await
            .unwrap();

        // Fields the record does not carry survive the merge
        let documents = store.documents.read().await;
        let document = documents.get(&session_id).unwrap();
        assert_eq!(document["legacyField"], "kept");
        assert!(document.get("programmingSkills").is_some());
    }

    #[tokio::test]
    async fn test_injected_failure_surfaces_unavailable() {
        let store = InMemoryProfileStore::new();
        store.set_fail_saves(true);
        let err = store
            .save(Uuid::new_v4(), &ProfileRecord::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
    }
}
