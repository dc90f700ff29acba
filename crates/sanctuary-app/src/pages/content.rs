//! Public content pages.

use chrono::NaiveDate;
use serde::Serialize;

use sanctuary_core::types::{
    Announcement, AnnouncementCategory, Devotion, Event, Hymn, LiturgicalColor, LiturgicalSeason,
    Sermon, SundayService,
};
use sanctuary_core::Result;

use crate::authorization::Capability;
use crate::core::AppCore;
use crate::services::VerseOfTheDay;

/// Badge styling for an announcement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAccent {
    /// Palette name
    pub tone: &'static str,
    /// Icon name
    pub icon: &'static str,
}

impl From<AnnouncementCategory> for CategoryAccent {
    fn from(category: AnnouncementCategory) -> Self {
        let (tone, icon) = match category {
            AnnouncementCategory::General => ("slate", "megaphone"),
            AnnouncementCategory::Audio => ("amber", "music"),
            AnnouncementCategory::Video => ("rose", "video"),
        };
        Self { tone, icon }
    }
}

/// An announcement with its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCard {
    /// The announcement
    #[serde(flatten)]
    pub announcement: Announcement,
    /// Badge styling
    pub accent: CategoryAccent,
}

impl AnnouncementCard {
    /// Attach the category accent.
    pub fn new(announcement: Announcement) -> Self {
        Self {
            accent: announcement.category.into(),
            announcement,
        }
    }
}

/// `/announcements`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsView {
    /// Active filter
    pub category: Option<AnnouncementCategory>,
    /// Newest first
    pub announcements: Vec<AnnouncementCard>,
    /// Whether the create and delete controls are shown
    pub can_manage: bool,
}

pub(super) async fn announcements(
    core: &AppCore,
    category: Option<AnnouncementCategory>,
) -> Result<AnnouncementsView> {
    let user = core.user().await;
    let announcements = core.content().announcements(category).await?;
    Ok(AnnouncementsView {
        category,
        announcements: announcements.into_iter().map(AnnouncementCard::new).collect(),
        can_manage: Capability::ManageAnnouncements.allows(user.role),
    })
}

/// `/devotion`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevotionView {
    /// Requested day
    pub date: NaiveDate,
    /// Devotion for that day or the closest earlier one
    pub devotion: Option<Devotion>,
    /// Earlier devotions, newest first
    pub archive: Vec<Devotion>,
}

pub(super) async fn devotion(core: &AppCore, date: Option<NaiveDate>) -> Result<DevotionView> {
    let date = match date {
        Some(date) => date,
        None => core.today().await,
    };
    let content = core.content();
    let (devotion, all) = futures::try_join!(content.devotion_for(date), content.devotions())?;
    let shown = devotion.as_ref().map(|d| d.id.clone());
    let archive = all
        .into_iter()
        .filter(|d| d.date <= date && Some(&d.id) != shown.as_ref())
        .collect();
    Ok(DevotionView {
        date,
        devotion,
        archive,
    })
}

/// `/verse`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseView {
    /// Requested day
    pub date: NaiveDate,
    /// Verse taken from that day's devotion
    pub verse: Option<VerseOfTheDay>,
}

pub(super) async fn verse(core: &AppCore, date: Option<NaiveDate>) -> Result<VerseView> {
    let date = match date {
        Some(date) => date,
        None => core.today().await,
    };
    Ok(VerseView {
        date,
        verse: core.content().verse_of_the_day(date).await?,
    })
}

/// `/events`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsView {
    /// Split date
    pub today: NaiveDate,
    /// Today and later, soonest first
    pub upcoming: Vec<Event>,
    /// Before today, most recent first
    pub past: Vec<Event>,
}

pub(super) async fn events(core: &AppCore) -> Result<EventsView> {
    let today = core.today().await;
    let (upcoming, past) = core.content().events_around(today).await?;
    Ok(EventsView {
        today,
        upcoming,
        past,
    })
}

/// `/service`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesView {
    /// First service on or after today
    pub next: Option<SundayService>,
    /// Every service, newest first
    pub services: Vec<SundayService>,
}

pub(super) async fn services(core: &AppCore) -> Result<ServicesView> {
    let today = core.today().await;
    let services = core.content().services().await?;
    let next = services
        .iter()
        .filter(|s| s.date >= today)
        .min_by_key(|s| s.date)
        .cloned();
    Ok(ServicesView { next, services })
}

/// `/hymnal`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HymnalView {
    /// Search text, when searching
    pub query: Option<String>,
    /// Matching hymns, by collection then number
    pub hymns: Vec<Hymn>,
}

pub(super) async fn hymnal(core: &AppCore, query: Option<&str>) -> Result<HymnalView> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let hymns = match query {
        Some(q) => core.content().search_hymns(q).await?,
        None => core.content().hymns().await?,
    };
    Ok(HymnalView {
        query: query.map(str::to_string),
        hymns,
    })
}

/// Display color for a liturgical color.
pub fn color_token(color: LiturgicalColor) -> &'static str {
    match color {
        LiturgicalColor::Purple => "#6b21a8",
        LiturgicalColor::White => "#f8fafc",
        LiturgicalColor::Green => "#15803d",
        LiturgicalColor::Red => "#b91c1c",
        LiturgicalColor::Gold => "#b45309",
    }
}

/// A season with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonCard {
    /// The season
    #[serde(flatten)]
    pub season: LiturgicalSeason,
    /// Hex color
    pub color_token: &'static str,
}

impl SeasonCard {
    /// Attach the color token.
    pub fn new(season: LiturgicalSeason) -> Self {
        Self {
            color_token: color_token(season.color),
            season,
        }
    }
}

/// `/liturgical`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiturgicalView {
    /// Requested day
    pub date: NaiveDate,
    /// Season containing that day
    pub current: Option<SeasonCard>,
    /// Whole church year, in calendar order
    pub seasons: Vec<SeasonCard>,
}

pub(super) async fn liturgical(core: &AppCore, date: Option<NaiveDate>) -> Result<LiturgicalView> {
    let date = match date {
        Some(date) => date,
        None => core.today().await,
    };
    let seasons: Vec<SeasonCard> = core
        .content()
        .seasons()
        .await?
        .into_iter()
        .map(SeasonCard::new)
        .collect();
    let current = seasons.iter().find(|c| c.season.contains(date)).cloned();
    Ok(LiturgicalView {
        date,
        current,
        seasons,
    })
}

/// `/sermons`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonsView {
    /// Newest first
    pub sermons: Vec<Sermon>,
    /// Newest sermon with a recording
    pub latest_recording: Option<Sermon>,
}

pub(super) async fn sermons(core: &AppCore) -> Result<SermonsView> {
    let sermons = core.content().sermons().await?;
    let latest_recording = sermons.iter().find(|s| s.media_url.is_some()).cloned();
    Ok(SermonsView {
        sermons,
        latest_recording,
    })
}
