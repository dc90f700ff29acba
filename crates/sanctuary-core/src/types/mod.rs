//! # Entity Records
//!
//! Flat, serde-serializable records shared by the store, the app core and
//! every frontend. No referential integrity is enforced between them.

pub mod content;
pub mod pastoral;
pub mod people;

pub use content::{
    Announcement, AnnouncementCategory, AnnouncementDraft, Devotion, Event, Hymn, HymnCollection,
    LiturgicalColor, LiturgicalSeason, Sermon, SundayService, SundayServiceDraft,
};
pub use pastoral::{
    MinisterMessage, MinisterMessageDraft, PrayerRequest, PrayerRequestDraft, PrayerStatus,
    SickReport, SickReportDraft,
};
pub use people::{
    AttendanceDraft, AttendanceRecord, ChurchBranch, Member, MemberStatus, Organization, User,
};
