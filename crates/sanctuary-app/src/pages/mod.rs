//! # Pages
//!
//! Headless view models, one per [`Route`]. A loader fetches what its page
//! needs (concurrently when it needs several collections) and returns a
//! serializable view; a frontend only renders it.
//!
//! Gated pages return [`Access::Denied`](crate::authorization::Access) with a
//! notice instead of content when the role lacks the capability.

mod content;
mod home;
mod portal;

pub use content::{
    AnnouncementCard, AnnouncementsView, CategoryAccent, DevotionView, EventsView, HymnalView,
    LiturgicalView, SeasonCard, SermonsView, ServicesView, VerseView, color_token,
};
pub use home::{greeting, portal_sections, DashboardView, PortalSection, PortalView};
pub use portal::{
    BulkMessagingView, ClassManagerView, MinistryForm, MinistryView, PastoralInboxView,
    ProfileView, RoleOption, ServicePlannerView, SettingsView,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sanctuary_core::types::AnnouncementCategory;
use sanctuary_core::Result;

use crate::authorization::Access;
use crate::core::AppCore;
use crate::routes::{resolve, Route};

/// Optional page parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Announcement category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AnnouncementCategory>,
    /// Hymnal search text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Date for the devotion, verse and liturgical pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Class shown in the class manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

/// A rendered page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum Page {
    /// `/dashboard`
    Dashboard(DashboardView),
    /// `/portal`
    Portal(PortalView),
    /// `/portal/class-manager`
    ClassManager(Access<ClassManagerView>),
    /// `/portal/messaging`
    BulkMessaging(Access<BulkMessagingView>),
    /// `/portal/prayer-requests`
    PrayerRequests(Access<PastoralInboxView>),
    /// `/portal/service-planner`
    ServicePlanner(Access<ServicePlannerView>),
    /// `/announcements`
    Announcements(AnnouncementsView),
    /// `/verse`
    Verse(VerseView),
    /// `/events`
    Events(EventsView),
    /// `/service`
    Service(ServicesView),
    /// `/devotion`
    Devotion(DevotionView),
    /// `/hymnal`
    Hymnal(HymnalView),
    /// `/liturgical`
    Liturgical(LiturgicalView),
    /// `/sermons`
    Sermons(SermonsView),
    /// `/ministry`
    Ministry(MinistryView),
    /// `/profile`
    Profile(ProfileView),
    /// `/settings`
    Settings(SettingsView),
}

impl Page {
    /// Whether the page shows a denial notice instead of content.
    pub fn is_denied(&self) -> bool {
        match self {
            Self::ClassManager(access) => !access.is_granted(),
            Self::BulkMessaging(access) => !access.is_granted(),
            Self::PrayerRequests(access) => !access.is_granted(),
            Self::ServicePlanner(access) => !access.is_granted(),
            _ => false,
        }
    }
}

/// Load the view model for `route`.
pub async fn load_page(core: &AppCore, route: Route, query: &PageQuery) -> Result<Page> {
    tracing::debug!(%route, "loading page");
    Ok(match route {
        Route::Dashboard => Page::Dashboard(home::dashboard(core).await?),
        Route::Portal => Page::Portal(home::portal(core).await?),
        Route::ClassManager => {
            Page::ClassManager(portal::class_manager(core, query.class_id.as_deref()).await?)
        }
        Route::BulkMessaging => Page::BulkMessaging(portal::bulk_messaging(core).await?),
        Route::PrayerRequests => Page::PrayerRequests(portal::pastoral_inbox(core).await?),
        Route::ServicePlanner => Page::ServicePlanner(portal::service_planner(core).await?),
        Route::Announcements => {
            Page::Announcements(content::announcements(core, query.category).await?)
        }
        Route::Verse => Page::Verse(content::verse(core, query.date).await?),
        Route::Events => Page::Events(content::events(core).await?),
        Route::Service => Page::Service(content::services(core).await?),
        Route::Devotion => Page::Devotion(content::devotion(core, query.date).await?),
        Route::Hymnal => Page::Hymnal(content::hymnal(core, query.search.as_deref()).await?),
        Route::Liturgical => Page::Liturgical(content::liturgical(core, query.date).await?),
        Route::Sermons => Page::Sermons(content::sermons(core).await?),
        Route::Ministry => Page::Ministry(portal::ministry(core).await?),
        Route::Profile => Page::Profile(portal::profile(core).await),
        Route::Settings => Page::Settings(portal::settings(core)),
    })
}

/// Resolve `path` and load the page it lands on.
pub async fn open(core: &AppCore, path: &str, query: &PageQuery) -> Result<Page> {
    load_page(core, resolve(path).route(), query).await
}
