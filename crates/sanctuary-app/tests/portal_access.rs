//! Role gating through the page loaders and the role switcher.

use std::sync::Arc;

use sanctuary_app::pages::{load_page, open, Page, PageQuery};
use sanctuary_app::{Access, AppConfig, AppCore, Capability, Role, Route};
use sanctuary_store::{DEMO_CLASS_ID, DEMO_CLASS_NAME};
use sanctuary_testkit::{FixedClock, TestStorage};

async fn core_as(role: Role) -> AppCore {
    let config = AppConfig {
        default_role: role,
        ..AppConfig::default()
    };
    AppCore::start(
        config,
        Arc::new(TestStorage::new()),
        Arc::new(FixedClock::default()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_bulk_messaging_gated_per_role() {
    for role in Role::ALL {
        let core = core_as(role).await;
        let page = load_page(&core, Route::BulkMessaging, &PageQuery::default())
            .await
            .unwrap();
        let Page::BulkMessaging(access) = page else {
            panic!("wrong page for {role}");
        };

        match role {
            Role::Member | Role::ClassLeader => {
                assert!(!access.is_granted(), "{role}");
                let json = serde_json::to_value(&access).unwrap();
                assert_eq!(json["access"], "denied");
                assert_eq!(
                    json["notice"],
                    Capability::BulkMessaging.denial_notice().as_str()
                );
            }
            _ => {
                let view = access.content().unwrap();
                assert_eq!(view.audience.all_active, 7, "{role}");
                assert_eq!(view.audience.by_class[DEMO_CLASS_ID], 3);
                assert_eq!(view.sent_this_session, 0);
            }
        }
    }
}

#[tokio::test]
async fn test_switch_role_applies_demo_class() {
    let core = core_as(Role::Member).await;
    let member = core.user().await;
    assert_eq!(member.class_id.as_deref(), Some(DEMO_CLASS_ID));

    let leader = core.switch_role(Role::ClassLeader).await.unwrap();
    assert_eq!(leader.role, Role::ClassLeader);
    assert_eq!(leader.class_id.as_deref(), Some(DEMO_CLASS_ID));
    assert_eq!(leader.class_name.as_deref(), Some(DEMO_CLASS_NAME));

    let page = load_page(&core, Route::ClassManager, &PageQuery::default())
        .await
        .unwrap();
    let Page::ClassManager(access) = page else {
        panic!("expected class manager");
    };
    let view = access.content().unwrap();
    assert_eq!(view.classes, vec![DEMO_CLASS_ID]);
    assert_eq!(view.class_id.as_deref(), Some(DEMO_CLASS_ID));
    assert_eq!(view.members.len(), 4);
    assert_eq!(view.active_count, 3);
    assert_eq!(view.attendance.len(), 2);

    let steward = core.switch_role(Role::SocietySteward).await.unwrap();
    assert!(steward.class_id.is_none());
    assert!(steward.class_name.is_none());
}

#[tokio::test]
async fn test_leader_cannot_open_other_class() {
    let core = core_as(Role::ClassLeader).await;
    let query = PageQuery {
        class_id: Some("cls_ebenezer".into()),
        ..PageQuery::default()
    };
    let page = load_page(&core, Route::ClassManager, &query).await.unwrap();
    let Page::ClassManager(Access::Denied { notice }) = page else {
        panic!("expected a denial screen, got {page:?}");
    };
    assert!(notice.contains("cls_ebenezer"), "{notice}");

    let own = load_page(&core, Route::ClassManager, &PageQuery::default())
        .await
        .unwrap();
    assert!(!own.is_denied());
}

#[tokio::test]
async fn test_gated_pages_for_member() {
    let core = core_as(Role::Member).await;
    for route in Route::ALL {
        let page = load_page(&core, route, &PageQuery::default()).await.unwrap();
        assert_eq!(page.is_denied(), !route.is_visible_to(Role::Member), "{route}");
    }
}

#[tokio::test]
async fn test_legacy_path_lands_on_ministry() {
    let core = core_as(Role::RevMinister).await;
    let page = open(&core, "#/sick-reports", &PageQuery::default())
        .await
        .unwrap();
    let Page::Ministry(view) = page else {
        panic!("expected ministry page");
    };
    assert_eq!(view.forms.len(), 3);
    assert!(view.can_view_submissions);

    let json = serde_json::to_value(open(&core, "/nowhere", &PageQuery::default()).await.unwrap())
        .unwrap();
    assert_eq!(json["page"], "dashboard");
}
