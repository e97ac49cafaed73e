//! Session identity and the registry of live profile records.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::record::ProfileRecord;
use crate::profile::store::ProfileStore;

/// Supplies an opaque, stable session identity. Carried in `AppState` as
/// `Arc<dyn IdentityProvider>` so a real auth backend can replace anonymous
/// issuance.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn establish(&self) -> Result<Uuid, AppError>;
}

/// Anonymous sign-in: every establishment without a prior id mints a fresh one.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn establish(&self) -> Result<Uuid, AppError> {
        Ok(Uuid::new_v4())
    }
}

/// Owner of the live profile records, one per active session. The in-memory
/// record is the source of truth; the store is a best-effort mirror.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    records: Arc<RwLock<HashMap<Uuid, ProfileRecord>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrates a session: stored fields overlay a default record. A missing
    /// document is a fresh profile; a failed or unreadable load falls back to
    /// the default and returns a notice so the caller can tell the two apart.
    /// Load failures are never fatal.
    pub async fn hydrate(
        &self,
        session_id: Uuid,
        store: &dyn ProfileStore,
    ) -> (ProfileRecord, Option<String>) {
        let (record, notice) = match store.load(session_id).await {
            Ok(Some(record)) => (record, None),
            Ok(None) => (ProfileRecord::default(), None),
            Err(e) => {
                warn!("Failed to load profile for session {session_id}: {e}");
                (
                    ProfileRecord::default(),
                    Some(format!("Error loading profile: {e}")),
                )
            }
        };
        self.records
            .write()
            .await
            .insert(session_id, record.clone());
        (record, notice)
    }

    pub async fn get(&self, session_id: Uuid) -> Result<ProfileRecord, AppError> {
        self.records
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(AppError::Unauthorized)
    }

    /// Applies a mutation to the live record and returns the updated copy.
    /// Mutations validate before touching the record, so a rejection leaves
    /// it unchanged.
    pub async fn update<F>(&self, session_id: Uuid, mutate: F) -> Result<ProfileRecord, AppError>
    where
        F: FnOnce(&mut ProfileRecord) -> Result<(), AppError>,
    {
        let mut records = self.records.write().await;
        let record = records.get_mut(&session_id).ok_or(AppError::Unauthorized)?;
        mutate(record)?;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::store::InMemoryProfileStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_hydrate_absent_document_yields_default_without_notice() {
        let registry = SessionRegistry::new();
        let store = InMemoryProfileStore::new();
        let (record, notice) = registry.hydrate(Uuid::new_v4(), &store).await;
        assert_eq!(record, ProfileRecord::default());
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_overlays_stored_fields() {
        let registry = SessionRegistry::new();
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        store
            .seed_document(
                session_id,
                json!({ "branch": "AIML", "programmingSkills": ["Python"] }),
            )
            .await;

        let (record, notice) = registry.hydrate(session_id, &store).await;
        assert_eq!(record.branch, "AIML");
        assert_eq!(record.programming_skills, vec!["Python".to_string()]);
        assert!(record.target_companies.is_empty());
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_unreadable_document_falls_back_with_notice() {
        let registry = SessionRegistry::new();
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        store
            .seed_document(session_id, json!({ "programmingSkills": "not-a-list" }))
            .await;

        let (record, notice) = registry.hydrate(session_id, &store).await;
        assert_eq!(record, ProfileRecord::default());
        // A fresh profile and a failed load must be distinguishable
        assert!(notice.unwrap().starts_with("Error loading profile:"));
    }

    #[tokio::test]
    async fn test_update_unknown_session_is_unauthorized() {
        let registry = SessionRegistry::new();
        let result = registry
            .update(Uuid::new_v4(), |record| {
                record.toggle_skill("Python");
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_rejected_mutation_leaves_record_unchanged() {
        let registry = SessionRegistry::new();
        let store = InMemoryProfileStore::new();
        let session_id = Uuid::new_v4();
        registry.hydrate(session_id, &store).await;

        registry
            .update(session_id, |record| record.add_target_company("Google"))
            .await
            .unwrap();
        let result = registry
            .update(session_id, |record| record.add_target_company("Google"))
            .await;
        assert!(result.is_err());

        let record = registry.get(session_id).await.unwrap();
        assert_eq!(record.target_companies, vec!["Google".to_string()]);
    }
}
