//! # Entity traits
//!
//! Capability traits that let one generic repository serve every record type:
//!
//! - [`Entity`]: has a string id and a kind
//! - [`Creatable`]: can be built from a draft plus a generated id and timestamp
//! - [`Tracked`]: carries a status field that transitions in place

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::PhysicalTime;

/// Kind tag for every stored record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Application user
    User,
    /// Class member
    Member,
    /// Announcement
    Announcement,
    /// Church event
    Event,
    /// Sunday service order
    SundayService,
    /// Daily devotion
    Devotion,
    /// Sermon
    Sermon,
    /// Hymn
    Hymn,
    /// Liturgical season
    LiturgicalSeason,
    /// Prayer request
    PrayerRequest,
    /// Sick report
    SickReport,
    /// Message to the minister
    MinisterMessage,
    /// Class attendance record
    AttendanceRecord,
    /// Church branch
    ChurchBranch,
    /// Church organization
    Organization,
}

impl EntityKind {
    /// Prefix used for generated ids (`<prefix>_<millis>`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::User => "u",
            Self::Member => "m",
            Self::Announcement => "a",
            Self::Event => "e",
            Self::SundayService => "svc",
            Self::Devotion => "d",
            Self::Sermon => "s",
            Self::Hymn => "h",
            Self::LiturgicalSeason => "ls",
            Self::PrayerRequest => "pr",
            Self::SickReport => "sr",
            Self::MinisterMessage => "mm",
            Self::AttendanceRecord => "att",
            Self::ChurchBranch => "b",
            Self::Organization => "org",
        }
    }

    /// Short label for logging/display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Member => "member",
            Self::Announcement => "announcement",
            Self::Event => "event",
            Self::SundayService => "sunday service",
            Self::Devotion => "devotion",
            Self::Sermon => "sermon",
            Self::Hymn => "hymn",
            Self::LiturgicalSeason => "liturgical season",
            Self::PrayerRequest => "prayer request",
            Self::SickReport => "sick report",
            Self::MinisterMessage => "minister message",
            Self::AttendanceRecord => "attendance record",
            Self::ChurchBranch => "church branch",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored record with a string id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Kind tag of this record type.
    const KIND: EntityKind;

    /// Record identifier.
    fn id(&self) -> &str;
}

/// A record that can be created from caller-supplied fields.
pub trait Creatable: Entity {
    /// Caller-supplied fields; the store fills in id and date.
    type Draft: Send + 'static;

    /// Build the full record from a draft, a generated id and the creation time.
    fn from_draft(id: String, at: PhysicalTime, draft: Self::Draft) -> Self;
}

/// A record whose status field transitions in place.
pub trait Tracked: Entity {
    /// Status value type.
    type Status: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Replace the status, leaving every other field untouched.
    fn set_status(&mut self, status: Self::Status);
}

/// Implement [`Entity`] for records whose identifier lives in an `id: String` field.
#[macro_export]
macro_rules! impl_entity {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl $crate::entity::Entity for $ty {
                const KIND: $crate::entity::EntityKind = $crate::entity::EntityKind::$kind;

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}
