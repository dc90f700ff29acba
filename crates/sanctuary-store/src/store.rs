//! # Mock Store
//!
//! The in-memory backend. All collections sit behind one lock; each
//! operation takes the lock once, so concurrent creates are both applied
//! and a reader never sees a half-applied mutation. The lock is never held
//! across an `.await`.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use sanctuary_core::effects::PhysicalTimeEffects;
use sanctuary_core::repository::{ReadRepository, StatusRepository, UserDirectory, WriteRepository};
use sanctuary_core::types::User;
use sanctuary_core::{Creatable, FellowshipError, Result, Role, Tracked};

use crate::ids::IdGenerator;
use crate::seed::{seed_snapshot, DEMO_CLASS_ID, DEMO_CLASS_NAME};
use crate::snapshot::{Snapshot, StoredEntity};

/// In-memory stand-in for a backend API.
pub struct MockStore {
    snapshot: RwLock<Snapshot>,
    clock: Arc<dyn PhysicalTimeEffects>,
    ids: IdGenerator,
}

impl std::fmt::Debug for MockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockStore")
            .field("snapshot", &*self.snapshot.read())
            .finish_non_exhaustive()
    }
}

impl MockStore {
    /// Create a store over an explicit snapshot.
    pub fn new(snapshot: Snapshot, clock: Arc<dyn PhysicalTimeEffects>) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            clock,
            ids: IdGenerator::new(),
        }
    }

    /// Create a store holding a fresh copy of the seed data.
    pub fn seeded(clock: Arc<dyn PhysicalTimeEffects>) -> Self {
        Self::new(seed_snapshot(), clock)
    }

    /// Copy of every collection, for diagnostics and tests.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.read().clone()
    }

    /// Discard every mutation and go back to the seed data.
    pub fn reset(&self) {
        *self.snapshot.write() = seed_snapshot();
        tracing::info!("mock store reset to seed data");
    }
}

#[async_trait]
impl<E: StoredEntity> ReadRepository<E> for MockStore {
    async fn list(&self) -> Result<Vec<E>> {
        Ok(E::collection(&self.snapshot.read()).clone())
    }

    async fn get(&self, id: &str) -> Result<Option<E>> {
        Ok(E::collection(&self.snapshot.read())
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }
}

#[async_trait]
impl<E: StoredEntity + Creatable> WriteRepository<E> for MockStore {
    async fn create(&self, draft: E::Draft) -> Result<E> {
        let at = self.clock.physical_time().await;
        let id = self.ids.next(E::KIND, at);
        let record = E::from_draft(id, at, draft);

        let mut snapshot = self.snapshot.write();
        let collection = E::collection_mut(&mut snapshot);
        collection.insert(0, record.clone());
        tracing::debug!(kind = %E::KIND, id = record.id(), len = collection.len(), "record created");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut snapshot = self.snapshot.write();
        let collection = E::collection_mut(&mut snapshot);
        let before = collection.len();
        collection.retain(|record| record.id() != id);
        let removed = collection.len() != before;
        tracing::debug!(kind = %E::KIND, id, removed, "record delete");
        Ok(removed)
    }
}

#[async_trait]
impl<E: StoredEntity + Tracked> StatusRepository<E> for MockStore {
    async fn update_status(&self, id: &str, status: E::Status) -> Result<bool> {
        let mut snapshot = self.snapshot.write();
        let matched = match E::collection_mut(&mut snapshot)
            .iter_mut()
            .find(|record| record.id() == id)
        {
            Some(record) => {
                record.set_status(status);
                true
            }
            None => false,
        };
        tracing::debug!(kind = %E::KIND, id, ?status, matched, "status update");
        Ok(matched)
    }
}

#[async_trait]
impl UserDirectory for MockStore {
    async fn current_user(&self) -> Result<User> {
        let snapshot = self.snapshot.read();
        snapshot
            .users
            .iter()
            .find(|user| user.id == snapshot.current_user_id)
            .cloned()
            .ok_or_else(|| {
                FellowshipError::not_found(format!("current user {}", snapshot.current_user_id))
            })
    }

    async fn update_role(&self, user_id: &str, role: Role) -> Result<User> {
        let mut snapshot = self.snapshot.write();
        let user = snapshot
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| FellowshipError::not_found(format!("user {user_id}")))?;

        user.role = role;
        match role {
            Role::Member | Role::ClassLeader => {
                user.class_id = Some(DEMO_CLASS_ID.to_string());
                user.class_name = Some(DEMO_CLASS_NAME.to_string());
            }
            Role::SocietySteward | Role::RevMinister | Role::Admin => {
                user.class_id = None;
                user.class_name = None;
            }
        }
        tracing::debug!(user_id, %role, "user role updated");
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctuary_core::types::{
        Announcement, AnnouncementCategory, AnnouncementDraft, Member, MemberStatus,
        PrayerRequest, PrayerStatus,
    };
    use sanctuary_testkit::FixedClock;

    fn store() -> (MockStore, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at_date(2026, 10, 19));
        (MockStore::seeded(clock.clone()), clock)
    }

    #[tokio::test]
    async fn test_create_announcement_prepends() {
        let (store, clock) = store();
        let draft = AnnouncementDraft::new("Test", "Body", AnnouncementCategory::General);

        let created = WriteRepository::<Announcement>::create(&store, draft)
            .await
            .unwrap();
        let all = ReadRepository::<Announcement>::list(&store).await.unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0], created);
        assert_eq!(created.id, format!("a_{}", clock.now().ts_ms));
        assert_eq!(created.date.to_string(), "2026-10-19");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (store, _) = store();
        let before = ReadRepository::<Announcement>::list(&store).await.unwrap();

        let removed = WriteRepository::<Announcement>::delete(&store, "missing")
            .await
            .unwrap();

        assert!(!removed);
        assert_eq!(
            ReadRepository::<Announcement>::list(&store).await.unwrap(),
            before
        );
    }

    #[tokio::test]
    async fn test_update_status_only_touches_status() {
        let (store, _) = store();
        let before = ReadRepository::<PrayerRequest>::get(&store, "pr1")
            .await
            .unwrap()
            .unwrap();

        let matched =
            StatusRepository::<PrayerRequest>::update_status(&store, "pr1", PrayerStatus::Closed)
                .await
                .unwrap();
        let after = ReadRepository::<PrayerRequest>::get(&store, "pr1")
            .await
            .unwrap()
            .unwrap();

        assert!(matched);
        assert_eq!(after.status, PrayerStatus::Closed);
        assert_eq!(
            PrayerRequest {
                status: before.status,
                ..after
            },
            before
        );
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let (store, _) = store();
        let matched =
            StatusRepository::<Member>::update_status(&store, "nobody", MemberStatus::Inactive)
                .await
                .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn test_switch_role_assigns_demo_class() {
        let (store, _) = store();
        let user = store.current_user().await.unwrap();
        assert_eq!(user.role, Role::Member);

        let leader = store.update_role(&user.id, Role::ClassLeader).await.unwrap();
        assert_eq!(leader.role, Role::ClassLeader);
        assert_eq!(leader.class_id.as_deref(), Some(DEMO_CLASS_ID));
        assert_eq!(leader.class_name.as_deref(), Some(DEMO_CLASS_NAME));

        let minister = store.update_role(&user.id, Role::RevMinister).await.unwrap();
        assert!(minister.class_id.is_none());
        assert_eq!(store.current_user().await.unwrap(), minister);
    }

    #[tokio::test]
    async fn test_update_role_unknown_user() {
        let (store, _) = store();
        let err = store.update_role("ghost", Role::Admin).await.unwrap_err();
        assert!(matches!(err, FellowshipError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reset_discards_mutations() {
        let (store, _) = store();
        WriteRepository::<Announcement>::delete(&store, "a1")
            .await
            .unwrap();
        store.reset();
        assert_eq!(store.snapshot(), seed_snapshot());
    }
}
