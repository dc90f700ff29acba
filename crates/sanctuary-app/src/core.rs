//! # App Core
//!
//! [`AppCore`] owns one session's worth of state: the backend gateway (a
//! fresh [`MockStore`] unless one is supplied), the signed-in user, branding
//! preferences and the messaging outbox. Frontends hold it as
//! `Arc<AppCore>`; dropping the last handle is sign-out, and every entity
//! mutation made through it goes with it.

use chrono::NaiveDate;
use std::sync::Arc;

use sanctuary_core::effects::{PhysicalTimeEffects, StorageCoreEffects};
use sanctuary_core::types::User;
use sanctuary_core::{Gateway, Result, Role};
use sanctuary_store::MockStore;

use crate::config::AppConfig;
use crate::services::{
    AdminService, ClassService, ContentService, MessagingService, Outbox, UserService,
};
use crate::session::Session;
use crate::settings::SettingsStore;

/// Headless application core.
pub struct AppCore {
    config: AppConfig,
    clock: Arc<dyn PhysicalTimeEffects>,
    session: Session,
    settings: SettingsStore,
    outbox: Arc<Outbox>,
    users: UserService,
    content: ContentService,
    admin: AdminService,
    classes: ClassService,
    messaging: MessagingService,
}

impl std::fmt::Debug for AppCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCore")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl AppCore {
    /// Start a session over a freshly seeded mock store.
    pub async fn start(
        config: AppConfig,
        storage: Arc<dyn StorageCoreEffects>,
        clock: Arc<dyn PhysicalTimeEffects>,
    ) -> Result<Self> {
        let store: Arc<dyn Gateway> = Arc::new(MockStore::seeded(clock.clone()));
        Self::with_gateway(config, store, storage, clock).await
    }

    /// Start a session over an existing gateway.
    pub async fn with_gateway(
        config: AppConfig,
        gateway: Arc<dyn Gateway>,
        storage: Arc<dyn StorageCoreEffects>,
        clock: Arc<dyn PhysicalTimeEffects>,
    ) -> Result<Self> {
        let outbox = Arc::new(Outbox::default());
        let users = UserService::new(gateway.clone());
        let messaging = MessagingService::with_outbox(gateway.clone(), clock.clone(), outbox.clone());
        let session = Session::load(&users).await?;
        let settings = SettingsStore::load(storage).await?;

        let core = Self {
            content: ContentService::new(gateway.clone()),
            admin: AdminService::new(gateway.clone(), messaging.clone()),
            classes: ClassService::new(gateway),
            config,
            clock,
            session,
            settings,
            outbox,
            users,
            messaging,
        };

        if core.session.user().await.role != core.config.default_role {
            core.switch_role(core.config.default_role).await?;
        }
        tracing::info!(church = %core.config.church_name, "app core started");
        Ok(core)
    }

    /// Configuration the core was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Today's date according to the clock.
    pub async fn today(&self) -> NaiveDate {
        self.clock.physical_time().await.date()
    }

    /// The signed-in user.
    pub async fn user(&self) -> User {
        self.session.user().await
    }

    /// Switch the signed-in user's role.
    pub async fn switch_role(&self, role: Role) -> Result<User> {
        self.session.switch_role(&self.users, role).await
    }

    /// Clock used for "today".
    pub fn clock(&self) -> &Arc<dyn PhysicalTimeEffects> {
        &self.clock
    }

    /// Session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Branding preferences.
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Everything "sent" this session.
    pub fn outbox(&self) -> &Arc<Outbox> {
        &self.outbox
    }

    /// Public content.
    pub fn content(&self) -> &ContentService {
        &self.content
    }

    /// Pastoral submissions and the service planner.
    pub fn admin(&self) -> &AdminService {
        &self.admin
    }

    /// Class registers and attendance.
    pub fn classes(&self) -> &ClassService {
        &self.classes
    }

    /// Bulk SMS.
    pub fn messaging(&self) -> &MessagingService {
        &self.messaging
    }
}
