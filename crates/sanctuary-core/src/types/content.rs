//! # Public Content Records
//!
//! Everything shown on the public-facing pages: announcements, events,
//! Sunday services, devotions, sermons, hymns and the liturgical calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::Creatable;
use crate::errors::FellowshipError;
use crate::time::PhysicalTime;

/// Announcement media category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnnouncementCategory {
    /// Text notice
    #[default]
    General,
    /// Audio clip
    Audio,
    /// Video clip
    Video,
}

impl AnnouncementCategory {
    /// Every category, in display order.
    pub const ALL: [AnnouncementCategory; 3] = [Self::General, Self::Audio, Self::Video];

    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }
}

impl fmt::Display for AnnouncementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnouncementCategory {
    type Err = FellowshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FellowshipError::invalid(format!("unknown announcement category: {s}")))
    }
}

/// A notice posted by the society stewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Announcement identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Media category
    pub category: AnnouncementCategory,
    /// Body text
    pub content: String,
    /// Publication date
    pub date: NaiveDate,
    /// Pinned to the dashboard
    #[serde(default)]
    pub is_featured: bool,
    /// Audio/video URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Fields supplied when posting an announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDraft {
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Media category
    #[serde(default)]
    pub category: AnnouncementCategory,
    /// Pin to the dashboard
    #[serde(default)]
    pub is_featured: bool,
    /// Audio/video URL
    #[serde(default)]
    pub media_url: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AnnouncementDraft {
    /// Draft with the three required fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: AnnouncementCategory,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
            ..Self::default()
        }
    }
}

impl Creatable for Announcement {
    type Draft = AnnouncementDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: AnnouncementDraft) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            content: draft.content,
            date: at.date(),
            is_featured: draft.is_featured,
            media_url: draft.media_url,
            image_url: draft.image_url,
        }
    }
}

/// A dated church event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event identifier
    pub id: String,
    /// Event title
    pub title: String,
    /// Event date
    pub date: NaiveDate,
    /// Start time as displayed ("4:00 PM")
    pub time: String,
    /// Venue
    pub location: String,
    /// Details
    pub description: String,
    /// Flyer image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Order of a Sunday service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SundayService {
    /// Service identifier
    pub id: String,
    /// Service date
    pub date: NaiveDate,
    /// Theme of the day
    pub theme: String,
    /// Preacher
    pub preacher: String,
    /// Liturgist
    pub liturgist: String,
    /// Scripture readings
    pub readings: Vec<String>,
    /// Hymn numbers sung
    pub hymns: Vec<u32>,
    /// Planner notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields supplied by the service planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SundayServiceDraft {
    /// Service date; defaults to the creation date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Theme of the day
    pub theme: String,
    /// Preacher
    pub preacher: String,
    /// Liturgist
    #[serde(default)]
    pub liturgist: String,
    /// Scripture readings
    #[serde(default)]
    pub readings: Vec<String>,
    /// Hymn numbers
    #[serde(default)]
    pub hymns: Vec<u32>,
    /// Planner notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Creatable for SundayService {
    type Draft = SundayServiceDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: SundayServiceDraft) -> Self {
        Self {
            id,
            date: draft.date.unwrap_or_else(|| at.date()),
            theme: draft.theme,
            preacher: draft.preacher,
            liturgist: draft.liturgist,
            readings: draft.readings,
            hymns: draft.hymns,
            notes: draft.notes,
        }
    }
}

/// Daily devotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devotion {
    /// Devotion identifier
    pub id: String,
    /// Day the devotion is for
    pub date: NaiveDate,
    /// Title
    pub title: String,
    /// Scripture reference ("Psalm 23:1")
    pub scripture: String,
    /// Verse text
    pub verse: String,
    /// Reflection body
    pub body: String,
    /// Closing prayer
    pub prayer: String,
    /// Author
    pub author: String,
}

/// Recorded sermon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sermon {
    /// Sermon identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Preacher
    pub preacher: String,
    /// Date preached
    pub date: NaiveDate,
    /// Scripture text
    pub scripture: String,
    /// Summary
    pub summary: String,
    /// Recording URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Hymn book a hymn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HymnCollection {
    /// Methodist Hymn Book
    Mhb,
    /// Canticles
    Canticle,
    /// Local-language hymns
    Local,
}

impl HymnCollection {
    /// Short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mhb => "MHB",
            Self::Canticle => "Canticle",
            Self::Local => "Local",
        }
    }
}

/// Hymnal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hymn {
    /// Hymn identifier
    pub id: String,
    /// Number within its collection
    pub number: u32,
    /// Title (usually the first line)
    pub title: String,
    /// Collection
    pub collection: HymnCollection,
    /// Verses in order
    pub verses: Vec<String>,
    /// Refrain, when the hymn has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chorus: Option<String>,
}

impl Hymn {
    /// Case-insensitive match against title or any verse line.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.verses.iter().any(|v| v.to_lowercase().contains(&needle))
    }
}

/// Liturgical color of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiturgicalColor {
    /// Advent, Lent
    Purple,
    /// Christmas, Easter
    White,
    /// Ordinary time
    Green,
    /// Pentecost
    Red,
    /// Feast days
    Gold,
}

/// A season of the church year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiturgicalSeason {
    /// Season identifier
    pub id: String,
    /// Season name
    pub name: String,
    /// First day (inclusive)
    pub start_date: NaiveDate,
    /// Last day (inclusive)
    pub end_date: NaiveDate,
    /// Liturgical color
    pub color: LiturgicalColor,
    /// Meaning of the season
    pub description: String,
}

impl LiturgicalSeason {
    /// Whether `date` falls within the season.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

crate::impl_entity! {
    Announcement => Announcement,
    Event => Event,
    SundayService => SundayService,
    Devotion => Devotion,
    Sermon => Sermon,
    Hymn => Hymn,
    LiturgicalSeason => LiturgicalSeason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_from_draft_stamps_date() {
        let at = PhysicalTime::from_millis(1_792_411_200_000);
        let draft = AnnouncementDraft::new("Test", "Body", AnnouncementCategory::General);
        let a = Announcement::from_draft("a_1".into(), at, draft);
        assert_eq!(a.date.to_string(), "2026-10-19");
        assert_eq!(a.category, AnnouncementCategory::General);
        assert!(!a.is_featured);
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            "video".parse::<AnnouncementCategory>().unwrap(),
            AnnouncementCategory::Video
        );
        assert!("Podcast".parse::<AnnouncementCategory>().is_err());
    }

    #[test]
    fn test_hymn_text_match() {
        let hymn = Hymn {
            id: "h1".into(),
            number: 1,
            title: "O for a thousand tongues to sing".into(),
            collection: HymnCollection::Mhb,
            verses: vec!["My great Redeemer's praise".into()],
            chorus: None,
        };
        assert!(hymn.matches_text("THOUSAND"));
        assert!(hymn.matches_text("redeemer"));
        assert!(!hymn.matches_text("amazing"));
    }
}
