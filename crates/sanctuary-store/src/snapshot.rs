//! # Store Snapshot
//!
//! One `Vec` per entity collection. [`StoredEntity`] maps a record type to
//! its collection so a single generic repository serves them all.

use sanctuary_core::types::{
    Announcement, AttendanceRecord, ChurchBranch, Devotion, Event, Hymn, LiturgicalSeason, Member,
    MinisterMessage, Organization, PrayerRequest, Sermon, SickReport, SundayService, User,
};
use sanctuary_core::Entity;

/// Every collection held by the mock backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Id of the signed-in user
    pub current_user_id: String,
    /// Users
    pub users: Vec<User>,
    /// Class members
    pub members: Vec<Member>,
    /// Announcements
    pub announcements: Vec<Announcement>,
    /// Events
    pub events: Vec<Event>,
    /// Sunday services
    pub services: Vec<SundayService>,
    /// Devotions
    pub devotions: Vec<Devotion>,
    /// Sermons
    pub sermons: Vec<Sermon>,
    /// Hymns
    pub hymns: Vec<Hymn>,
    /// Liturgical seasons
    pub seasons: Vec<LiturgicalSeason>,
    /// Prayer requests
    pub prayer_requests: Vec<PrayerRequest>,
    /// Sick reports
    pub sick_reports: Vec<SickReport>,
    /// Messages to the minister
    pub minister_messages: Vec<MinisterMessage>,
    /// Attendance records
    pub attendance: Vec<AttendanceRecord>,
    /// Church branches
    pub branches: Vec<ChurchBranch>,
    /// Organizations
    pub organizations: Vec<Organization>,
}

/// A record type with a home collection in [`Snapshot`].
pub trait StoredEntity: Entity {
    /// The collection holding this record type.
    fn collection(snapshot: &Snapshot) -> &Vec<Self>;

    /// Mutable access to the collection holding this record type.
    fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self>;
}

macro_rules! stored_in {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl StoredEntity for $ty {
                fn collection(snapshot: &Snapshot) -> &Vec<Self> {
                    &snapshot.$field
                }

                fn collection_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
                    &mut snapshot.$field
                }
            }
        )+
    };
}

stored_in! {
    User => users,
    Member => members,
    Announcement => announcements,
    Event => events,
    SundayService => services,
    Devotion => devotions,
    Sermon => sermons,
    Hymn => hymns,
    LiturgicalSeason => seasons,
    PrayerRequest => prayer_requests,
    SickReport => sick_reports,
    MinisterMessage => minister_messages,
    AttendanceRecord => attendance,
    ChurchBranch => branches,
    Organization => organizations,
}
