//! Public content: announcements, events, services, devotions, sermons,
//! hymns, the liturgical calendar and the society directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sanctuary_core::types::{
    Announcement, AnnouncementCategory, AnnouncementDraft, ChurchBranch, Devotion, Event, Hymn,
    HymnCollection, LiturgicalSeason, Organization, Sermon, SundayService, User,
};
use sanctuary_core::{Gateway, ReadRepository, Result, WriteRepository};

use super::require_text;
use crate::authorization::{require, Capability};

/// Verse shown on the verse-of-the-day page, taken from the devotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseOfTheDay {
    /// Day the verse is for
    pub date: NaiveDate,
    /// Scripture reference
    pub reference: String,
    /// Verse text
    pub text: String,
    /// Devotion it comes from
    pub devotion_id: String,
}

/// Read access to public content, plus announcement management.
#[derive(Clone)]
pub struct ContentService {
    gateway: Arc<dyn Gateway>,
}

impl ContentService {
    /// Service over `gateway`.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Announcements, newest first, optionally limited to one category.
    pub async fn announcements(
        &self,
        category: Option<AnnouncementCategory>,
    ) -> Result<Vec<Announcement>> {
        let all = ReadRepository::<Announcement>::list(&*self.gateway).await?;
        Ok(match category {
            Some(category) => all.into_iter().filter(|a| a.category == category).collect(),
            None => all,
        })
    }

    /// Post an announcement.
    pub async fn create_announcement(
        &self,
        actor: &User,
        draft: AnnouncementDraft,
    ) -> Result<Announcement> {
        require(actor, Capability::ManageAnnouncements, "post announcement")?;
        require_text("title", &draft.title)?;
        require_text("content", &draft.content)?;
        WriteRepository::<Announcement>::create(&*self.gateway, draft).await
    }

    /// Remove an announcement. Unknown ids are not an error.
    pub async fn delete_announcement(&self, actor: &User, id: &str) -> Result<bool> {
        require(actor, Capability::ManageAnnouncements, "delete announcement")?;
        WriteRepository::<Announcement>::delete(&*self.gateway, id).await
    }

    /// Every event, in collection order.
    pub async fn events(&self) -> Result<Vec<Event>> {
        ReadRepository::<Event>::list(&*self.gateway).await
    }

    /// Events on or after `today`, soonest first, at most `limit`.
    pub async fn upcoming_events(&self, today: NaiveDate, limit: usize) -> Result<Vec<Event>> {
        let (upcoming, _) = self.events_around(today).await?;
        Ok(upcoming.into_iter().take(limit).collect())
    }

    /// Events split on `today`: upcoming soonest first, past most recent first.
    pub async fn events_around(&self, today: NaiveDate) -> Result<(Vec<Event>, Vec<Event>)> {
        let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) = self
            .events()
            .await?
            .into_iter()
            .partition(|e| e.date >= today);
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        past.sort_by(|a, b| b.date.cmp(&a.date));
        Ok((upcoming, past))
    }

    /// Sunday services, newest first.
    pub async fn services(&self) -> Result<Vec<SundayService>> {
        let mut services = ReadRepository::<SundayService>::list(&*self.gateway).await?;
        services.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(services)
    }

    /// Every devotion, newest first.
    pub async fn devotions(&self) -> Result<Vec<Devotion>> {
        let mut devotions = ReadRepository::<Devotion>::list(&*self.gateway).await?;
        devotions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(devotions)
    }

    /// The devotion for `date`, or the most recent one before it.
    pub async fn devotion_for(&self, date: NaiveDate) -> Result<Option<Devotion>> {
        Ok(self
            .devotions()
            .await?
            .into_iter()
            .find(|d| d.date <= date))
    }

    /// Verse from the devotion for `date`.
    pub async fn verse_of_the_day(&self, date: NaiveDate) -> Result<Option<VerseOfTheDay>> {
        Ok(self.devotion_for(date).await?.map(|d| VerseOfTheDay {
            date,
            reference: d.scripture,
            text: d.verse,
            devotion_id: d.id,
        }))
    }

    /// Sermons, newest first.
    pub async fn sermons(&self) -> Result<Vec<Sermon>> {
        let mut sermons = ReadRepository::<Sermon>::list(&*self.gateway).await?;
        sermons.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sermons)
    }

    /// The whole hymnal, by collection then number.
    pub async fn hymns(&self) -> Result<Vec<Hymn>> {
        let mut hymns = ReadRepository::<Hymn>::list(&*self.gateway).await?;
        hymns.sort_by_key(|h| (collection_order(h.collection), h.number));
        Ok(hymns)
    }

    /// Hymns matching `query`: a number matches that hymn number in any
    /// collection, anything else matches title or verse text.
    pub async fn search_hymns(&self, query: &str) -> Result<Vec<Hymn>> {
        let query = query.trim();
        let hymns = self.hymns().await?;
        if query.is_empty() {
            return Ok(hymns);
        }
        Ok(match query.parse::<u32>() {
            Ok(number) => hymns.into_iter().filter(|h| h.number == number).collect(),
            Err(_) => hymns.into_iter().filter(|h| h.matches_text(query)).collect(),
        })
    }

    /// A hymn by collection and number.
    pub async fn hymn_by_number(
        &self,
        collection: HymnCollection,
        number: u32,
    ) -> Result<Option<Hymn>> {
        Ok(self
            .hymns()
            .await?
            .into_iter()
            .find(|h| h.collection == collection && h.number == number))
    }

    /// Liturgical seasons in calendar order.
    pub async fn seasons(&self) -> Result<Vec<LiturgicalSeason>> {
        let mut seasons = ReadRepository::<LiturgicalSeason>::list(&*self.gateway).await?;
        seasons.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(seasons)
    }

    /// The season containing `date`.
    pub async fn season_for(&self, date: NaiveDate) -> Result<Option<LiturgicalSeason>> {
        Ok(self
            .seasons()
            .await?
            .into_iter()
            .find(|s| s.contains(date)))
    }

    /// Branches of the circuit.
    pub async fn branches(&self) -> Result<Vec<ChurchBranch>> {
        ReadRepository::<ChurchBranch>::list(&*self.gateway).await
    }

    /// Church organizations.
    pub async fn organizations(&self) -> Result<Vec<Organization>> {
        ReadRepository::<Organization>::list(&*self.gateway).await
    }
}

fn collection_order(collection: HymnCollection) -> u8 {
    match collection {
        HymnCollection::Mhb => 0,
        HymnCollection::Canticle => 1,
        HymnCollection::Local => 2,
    }
}
