//! End-to-end session flows through [`AppCore`].

use std::sync::Arc;

use sanctuary_app::pages::{load_page, Page, PageQuery};
use sanctuary_app::services::Audience;
use sanctuary_app::{AppConfig, AppCore, Role, Route, ThemePreference};
use sanctuary_core::effects::{StorageCoreEffects, StorageError};
use sanctuary_core::types::{AnnouncementCategory, AnnouncementDraft, PrayerStatus};
use sanctuary_effects::FilesystemStorageHandler;
use sanctuary_testkit::{prayer_draft, sick_report_draft, test_today, FixedClock, TestStorage};

async fn start(role: Role, storage: Arc<TestStorage>) -> AppCore {
    AppCore::start(
        AppConfig {
            default_role: role,
            ..AppConfig::default()
        },
        storage,
        Arc::new(FixedClock::default()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_dashboard_for_demo_member() {
    let core = start(Role::Member, Arc::new(TestStorage::new())).await;
    let Page::Dashboard(view) = load_page(&core, Route::Dashboard, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected dashboard");
    };

    assert_eq!(view.greeting, "Good afternoon, Ama");
    assert_eq!(view.featured.as_ref().unwrap().announcement.id, "a1");
    let upcoming: Vec<&str> = view.upcoming_events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(upcoming, vec!["e1", "e2", "e3"]);
    assert_eq!(view.devotion.as_ref().unwrap().date, test_today());
    let season = view.season.unwrap();
    assert_eq!(season.season.name, "Ordinary Time");
    assert_eq!(season.color_token, "#15803d");
}

#[tokio::test]
async fn test_portal_lists_circuit_directory() {
    let core = start(Role::Member, Arc::new(TestStorage::new())).await;
    let Page::Portal(view) = load_page(&core, Route::Portal, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected portal");
    };

    let branches: Vec<&str> = view.branches.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(branches, vec!["b1", "b2", "b3"]);
    let organizations: Vec<&str> = view.organizations.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(organizations, vec!["org1", "org2", "org3", "org4"]);
    assert_eq!(view.organizations[0].name, "Singing Band");
    assert_eq!(view.role_label, "Member");
}

#[tokio::test]
async fn test_announcement_lifecycle_as_admin() {
    let core = start(Role::Admin, Arc::new(TestStorage::new())).await;
    let admin = core.user().await;

    let mut draft = AnnouncementDraft::new(
        "Harvest Thanksgiving",
        "Bring your offerings",
        AnnouncementCategory::Video,
    );
    draft.is_featured = true;
    let created = core.content().create_announcement(&admin, draft).await.unwrap();
    assert!(core.content().delete_announcement(&admin, "a1").await.unwrap());

    let Page::Announcements(view) = load_page(&core, Route::Announcements, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected announcements");
    };
    assert!(view.can_manage);
    let ids: Vec<&str> = view
        .announcements
        .iter()
        .map(|c| c.announcement.id.as_str())
        .collect();
    assert_eq!(ids, vec![created.id.as_str(), "a2"]);
    assert_eq!(view.announcements[0].accent.icon, "video");

    let Page::Dashboard(dashboard) = load_page(&core, Route::Dashboard, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected dashboard");
    };
    assert_eq!(dashboard.featured.unwrap().announcement.id, created.id);
}

#[tokio::test]
async fn test_member_cannot_manage_announcements() {
    let core = start(Role::Member, Arc::new(TestStorage::new())).await;
    let member = core.user().await;
    let err = core
        .content()
        .delete_announcement(&member, "a1")
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());
    assert_eq!(core.content().announcements(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_pastoral_flow_reaches_the_inbox() {
    let core = start(Role::Member, Arc::new(TestStorage::new())).await;
    let member = core.user().await;
    let request = core
        .admin()
        .submit_prayer_request(&member, prayer_draft("", "Travelling mercies"))
        .await
        .unwrap();
    assert_eq!(request.requester, "Ama Mensah");
    assert_eq!(request.status, PrayerStatus::New);
    core.admin()
        .submit_sick_report(&member, sick_report_draft("Kojo Asante", ""))
        .await
        .unwrap();
    assert_eq!(core.outbox().notices().len(), 1);

    let minister = core.switch_role(Role::RevMinister).await.unwrap();
    assert!(core
        .admin()
        .update_prayer_status(&minister, &request.id, PrayerStatus::InProgress)
        .await
        .unwrap());

    let Page::PrayerRequests(access) = load_page(&core, Route::PrayerRequests, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected prayer requests");
    };
    let inbox = access.content().unwrap();
    assert_eq!(inbox.prayer_requests[0].id, request.id);
    assert_eq!(inbox.prayer_requests[0].status, PrayerStatus::InProgress);
    assert_eq!(inbox.prayer_requests.len(), 4);
    assert_eq!(inbox.sick_reports[0].reported_by, "Ama Mensah");
    assert_eq!(inbox.sick_reports[0].class_name.as_deref(), Some("Bethel Class"));
}

#[tokio::test]
async fn test_bulk_sms_lands_in_outbox() {
    let core = start(Role::SocietySteward, Arc::new(TestStorage::new())).await;
    let steward = core.user().await;
    let batch = core
        .messaging()
        .send_bulk(&steward, &Audience::Class("cls_bethel".into()), "Class meeting moved")
        .await
        .unwrap();
    assert_eq!(batch.dispatches.len(), 3);
    assert_eq!(core.outbox().dispatches().len(), 3);

    let Page::BulkMessaging(access) = load_page(&core, Route::BulkMessaging, &PageQuery::default())
        .await
        .unwrap()
    else {
        panic!("expected bulk messaging");
    };
    assert_eq!(access.content().unwrap().sent_this_session, 3);
}

#[tokio::test]
async fn test_preferences_survive_restart() {
    let storage = Arc::new(TestStorage::new());
    let core = start(Role::Member, storage.clone()).await;
    core.settings().set_theme(ThemePreference::Dark).await.unwrap();
    let logo = sanctuary_app::logo_data_uri("image/png", &[0x89, 0x50, 0x4e, 0x47]).unwrap();
    core.settings().update_logo(Some(logo.clone())).await.unwrap();
    drop(core);

    let core = start(Role::Member, storage.clone()).await;
    let prefs = core.settings().preferences();
    assert_eq!(prefs.theme, ThemePreference::Dark);
    assert_eq!(prefs.logo.as_deref(), Some(logo.as_str()));

    core.settings().update_logo(None).await.unwrap();
    assert_eq!(storage.get_string("sanctuary-logo").await, None);
    assert_eq!(
        storage.get_string("sanctuary-theme").await.as_deref(),
        Some("dark")
    );
}

#[tokio::test]
async fn test_preferences_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(FixedClock::default());
    let open = || {
        AppCore::start(
            AppConfig::default(),
            Arc::new(FilesystemStorageHandler::new(dir.path())),
            clock.clone(),
        )
    };

    let core = open().await.unwrap();
    core.settings().set_theme(ThemePreference::Light).await.unwrap();
    drop(core);

    let core = open().await.unwrap();
    assert_eq!(core.settings().preferences().theme, ThemePreference::Light);
    assert!(core.settings().preferences().logo.is_none());
}

/// Handler with nothing beyond the three key/value operations.
#[derive(Default)]
struct KeyValueOnly {
    entries: parking_lot::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

#[async_trait::async_trait]
impl StorageCoreEffects for KeyValueOnly {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries.lock().remove(key).is_some())
    }
}

#[tokio::test]
async fn test_core_runs_on_plain_key_value_storage() {
    let storage = Arc::new(KeyValueOnly::default());
    let core = AppCore::start(
        AppConfig::default(),
        storage.clone(),
        Arc::new(FixedClock::default()),
    )
    .await
    .unwrap();

    core.settings().set_theme(ThemePreference::Dark).await.unwrap();
    core.settings().update_logo(None).await.unwrap();

    let stored = storage.entries.lock().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get("sanctuary-theme").map(Vec::as_slice), Some(&b"dark"[..]));
}
