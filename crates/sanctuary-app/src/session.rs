//! Signed-in user context
//!
//! Holds the current user and a count of role switches in flight; the
//! session is loading while that count is non-zero. There is no
//! authentication: the role switcher is a demo affordance and the backend
//! decides the class pairing.

use async_lock::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use sanctuary_core::types::User;
use sanctuary_core::{Result, Role};

use crate::services::UserService;

/// Current user plus the in-flight flag.
#[derive(Debug)]
pub struct Session {
    user: RwLock<User>,
    in_flight: AtomicUsize,
}

/// Counts one switch in flight until dropped, so a failed switch never leaves
/// the session loading.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Session {
    /// Session for an already-known user.
    pub fn new(user: User) -> Self {
        Self {
            user: RwLock::new(user),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Fetch the current user from the backend.
    pub async fn load(users: &UserService) -> Result<Self> {
        let user = users.current_user().await?;
        tracing::debug!(user = %user.id, role = %user.role, "session loaded");
        Ok(Self::new(user))
    }

    /// Snapshot of the current user.
    pub async fn user(&self) -> User {
        self.user.read().await.clone()
    }

    /// Whether any role switch is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Change the current user's role and adopt the backend's answer.
    pub async fn switch_role(&self, users: &UserService, role: Role) -> Result<User> {
        let _loading = LoadingGuard::enter(&self.in_flight);
        let user_id = self.user.read().await.id.clone();

        let updated = users.switch_role(&user_id, role).await?;
        let previous = std::mem::replace(&mut *self.user.write().await, updated.clone());

        tracing::info!(
            user = %updated.id,
            from = %previous.role,
            to = %updated.role,
            class = updated.class_id.as_deref().unwrap_or("-"),
            "role switched"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctuary_store::{MockStore, DEMO_CLASS_ID};
    use sanctuary_testkit::FixedClock;
    use std::sync::Arc;

    fn users() -> UserService {
        UserService::new(Arc::new(MockStore::seeded(Arc::new(FixedClock::default()))))
    }

    #[tokio::test]
    async fn test_switch_to_leader_pairs_class() {
        let users = users();
        let session = Session::load(&users).await.unwrap();
        assert_eq!(session.user().await.role, Role::Member);

        let user = session
            .switch_role(&users, Role::ClassLeader)
            .await
            .unwrap();

        assert_eq!(user.role, Role::ClassLeader);
        assert_eq!(user.class_id.as_deref(), Some(DEMO_CLASS_ID));
        assert_eq!(session.user().await, user);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_failed_switch_clears_loading() {
        let users = users();
        let mut ghost = sanctuary_testkit::user_with_role(Role::Member);
        ghost.id = "ghost".into();
        let session = Session::new(ghost.clone());

        assert!(session.switch_role(&users, Role::Admin).await.is_err());
        assert!(!session.is_loading());
        assert_eq!(session.user().await, ghost);
    }

    #[test]
    fn test_overlapping_switches_stay_loading() {
        let session = Session::new(sanctuary_testkit::user_with_role(Role::Member));

        let first = LoadingGuard::enter(&session.in_flight);
        let second = LoadingGuard::enter(&session.in_flight);
        assert!(session.is_loading());

        drop(first);
        assert!(session.is_loading());
        drop(second);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_concurrent_switches_settle() {
        let users = users();
        let session = Session::load(&users).await.unwrap();

        let (leader, steward) = futures::join!(
            session.switch_role(&users, Role::ClassLeader),
            session.switch_role(&users, Role::SocietySteward),
        );
        leader.unwrap();
        steward.unwrap();

        assert!(!session.is_loading());
        assert!(matches!(
            session.user().await.role,
            Role::ClassLeader | Role::SocietySteward
        ));
    }
}
