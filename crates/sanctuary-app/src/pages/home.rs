//! Dashboard and portal landing pages.

use chrono::Timelike;
use serde::Serialize;

use sanctuary_core::types::{ChurchBranch, Devotion, Event, Organization, User};
use sanctuary_core::{Result, Role};

use super::content::{AnnouncementCard, SeasonCard};
use crate::core::AppCore;
use crate::routes::Route;

/// Greeting for the hour of the day (UTC).
pub fn greeting(hour: u32, first_name: &str) -> String {
    let part = match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{part}, {first_name}")
}

/// A tile on the portal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSection {
    /// Tile heading
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Where the tile leads
    pub route: Route,
}

const fn section(title: &'static str, description: &'static str, route: Route) -> PortalSection {
    PortalSection {
        title,
        description,
        route,
    }
}

/// Portal tiles for `role`.
pub fn portal_sections(role: Role) -> Vec<PortalSection> {
    let ministry = section(
        "Ministry Forms",
        "Prayer requests, sick reports and messages to the minister",
        Route::Ministry,
    );
    let class = section(
        "Class Manager",
        "Class register and weekly attendance",
        Route::ClassManager,
    );
    let inbox = section(
        "Prayer Requests",
        "Follow up prayer requests and sick reports",
        Route::PrayerRequests,
    );
    let planner = section(
        "Service Planner",
        "Plan the order of Sunday worship",
        Route::ServicePlanner,
    );
    let sms = section(
        "Bulk Messaging",
        "Send an SMS to the whole society or one class",
        Route::BulkMessaging,
    );

    match role {
        Role::Member => vec![
            ministry,
            section("Devotion", "Today's reading and prayer", Route::Devotion),
            section("Events", "What is coming up at church", Route::Events),
        ],
        Role::ClassLeader => vec![class, ministry],
        Role::SocietySteward => vec![class, sms, inbox, planner, ministry],
        Role::RevMinister => vec![inbox, planner, sms, class],
        Role::Admin => vec![
            class,
            sms,
            inbox,
            planner,
            section("Settings", "Church branding and theme", Route::Settings),
        ],
    }
}

/// The home screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// "Good morning, Ama"
    pub greeting: String,
    /// Church name from configuration
    pub church_name: String,
    /// First featured announcement, else the newest one
    pub featured: Option<AnnouncementCard>,
    /// Next upcoming events, soonest first
    pub upcoming_events: Vec<Event>,
    /// Today's devotion (or the most recent one)
    pub devotion: Option<Devotion>,
    /// Season today falls in
    pub season: Option<SeasonCard>,
    /// Portal shortcuts for the signed-in role
    pub portal: Vec<PortalSection>,
}

pub(super) async fn dashboard(core: &AppCore) -> Result<DashboardView> {
    let user = core.user().await;
    let now = core.clock().physical_time().await;
    let today = now.date();
    let content = core.content();

    let (announcements, upcoming_events, devotion, season) = futures::try_join!(
        content.announcements(None),
        content.upcoming_events(today, core.config().upcoming_events),
        content.devotion_for(today),
        content.season_for(today),
    )?;

    let featured = announcements
        .iter()
        .find(|a| a.is_featured)
        .or_else(|| announcements.first())
        .map(|a| AnnouncementCard::new(a.clone()));

    Ok(DashboardView {
        greeting: greeting(now.to_datetime().hour(), user.first_name()),
        church_name: core.config().church_name.clone(),
        featured,
        upcoming_events,
        devotion,
        season: season.map(SeasonCard::new),
        portal: portal_sections(user.role),
    })
}

/// The portal landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalView {
    /// Signed-in user
    pub user: User,
    /// Role label, e.g. "Class Leader"
    pub role_label: &'static str,
    /// Tiles for the role
    pub sections: Vec<PortalSection>,
    /// Branches of the circuit
    pub branches: Vec<ChurchBranch>,
    /// Church organizations
    pub organizations: Vec<Organization>,
}

pub(super) async fn portal(core: &AppCore) -> Result<PortalView> {
    let user = core.user().await;
    let content = core.content();
    let (branches, organizations) =
        futures::try_join!(content.branches(), content.organizations())?;

    Ok(PortalView {
        role_label: user.role.label(),
        sections: portal_sections(user.role),
        user,
        branches,
        organizations,
    })
}
