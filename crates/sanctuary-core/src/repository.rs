//! # Repository Gateway
//!
//! The contract between the app core and whatever backend holds the data.
//! Every entity gets the same capability set:
//!
//! - [`ReadRepository`]: `list`, `get`
//! - [`WriteRepository`]: `create` (prepend with generated id), `delete`
//! - [`StatusRepository`]: `update_status` (status field only)
//!
//! [`Gateway`] bundles the capabilities the app needs for every entity, so
//! the app core holds a single `Arc<dyn Gateway>` and a network-backed
//! implementation can replace the mock store without touching call sites.
//!
//! Missing ids are not errors: `delete` and `update_status` report whether a
//! record matched and leave the collection untouched otherwise.

use async_trait::async_trait;

use crate::entity::{Creatable, Entity, Tracked};
use crate::errors::Result;
use crate::role::Role;
use crate::types::{
    Announcement, AttendanceRecord, ChurchBranch, Devotion, Event, Hymn, LiturgicalSeason, Member,
    MinisterMessage, Organization, PrayerRequest, Sermon, SickReport, SundayService, User,
};

/// Read access to one entity collection.
#[async_trait]
pub trait ReadRepository<E: Entity>: Send + Sync {
    /// All records, in collection order (newest-created first).
    async fn list(&self) -> Result<Vec<E>>;

    /// The record with `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<E>>;
}

/// Create/delete access to one entity collection.
#[async_trait]
pub trait WriteRepository<E: Creatable>: ReadRepository<E> {
    /// Assign a generated id and timestamp, prepend the record, return it.
    async fn create(&self, draft: E::Draft) -> Result<E>;

    /// Remove the record with `id`. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Status transitions for one entity collection.
#[async_trait]
pub trait StatusRepository<E: Tracked>: ReadRepository<E> {
    /// Replace the status of the record with `id`. Returns whether it matched.
    async fn update_status(&self, id: &str, status: E::Status) -> Result<bool>;
}

/// The signed-in user (demo role switcher, no authentication).
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// The current user.
    async fn current_user(&self) -> Result<User>;

    /// Change a user's role in place, applying the demo class pairing.
    /// Returns the updated user.
    async fn update_role(&self, user_id: &str, role: Role) -> Result<User>;
}

/// Everything the app core needs from a backend.
pub trait Gateway:
    UserDirectory
    + StatusRepository<Member>
    + WriteRepository<Announcement>
    + ReadRepository<Event>
    + WriteRepository<SundayService>
    + ReadRepository<Devotion>
    + ReadRepository<Sermon>
    + ReadRepository<Hymn>
    + ReadRepository<LiturgicalSeason>
    + WriteRepository<PrayerRequest>
    + StatusRepository<PrayerRequest>
    + WriteRepository<SickReport>
    + WriteRepository<MinisterMessage>
    + WriteRepository<AttendanceRecord>
    + ReadRepository<ChurchBranch>
    + ReadRepository<Organization>
{
}

impl<T> Gateway for T where
    T: UserDirectory
        + StatusRepository<Member>
        + WriteRepository<Announcement>
        + ReadRepository<Event>
        + WriteRepository<SundayService>
        + ReadRepository<Devotion>
        + ReadRepository<Sermon>
        + ReadRepository<Hymn>
        + ReadRepository<LiturgicalSeason>
        + WriteRepository<PrayerRequest>
        + StatusRepository<PrayerRequest>
        + WriteRepository<SickReport>
        + WriteRepository<MinisterMessage>
        + WriteRepository<AttendanceRecord>
        + ReadRepository<ChurchBranch>
        + ReadRepository<Organization>
        + ?Sized
{
}
