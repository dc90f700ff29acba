//! Bulk SMS and steward notifications
//!
//! Nothing here leaves the process. [`OutboxSmsGateway`] is the only
//! [`SmsGateway`]: it records each message in the session [`Outbox`] as
//! `Queued` and logs it. Steward notifications land in the same outbox.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use sanctuary_core::effects::PhysicalTimeEffects;
use sanctuary_core::types::{Member, MemberStatus, User};
use sanctuary_core::{FellowshipError, Gateway, PhysicalTime, ReadRepository, Result};

use super::require_text;
use crate::authorization::{require, Capability};

/// Delivery state of an SMS. The demo gateway never gets past `Queued`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmsStatus {
    /// Accepted for sending
    Queued,
}

/// One message to one phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsDispatch {
    /// Dispatch identifier
    pub id: String,
    /// Batch this message belongs to
    pub batch_id: Uuid,
    /// Recipient phone number
    pub recipient: String,
    /// Message text
    pub body: String,
    /// Delivery state
    pub status: SmsStatus,
    /// When it was queued
    pub created_at: PhysicalTime,
}

/// Result of a bulk send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsBatch {
    /// Batch identifier
    pub batch_id: Uuid,
    /// Messages queued, one per recipient
    pub dispatches: Vec<SmsDispatch>,
}

/// In-app notice to the society stewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StewardNotice {
    /// Subject line
    pub subject: String,
    /// Details
    pub body: String,
    /// When it was raised
    pub created_at: PhysicalTime,
}

/// Everything "sent" during this session.
#[derive(Debug, Default)]
pub struct Outbox {
    dispatches: Mutex<Vec<SmsDispatch>>,
    notices: Mutex<Vec<StewardNotice>>,
}

impl Outbox {
    /// Queued SMS, oldest first.
    pub fn dispatches(&self) -> Vec<SmsDispatch> {
        self.dispatches.lock().clone()
    }

    /// Steward notices, oldest first.
    pub fn notices(&self) -> Vec<StewardNotice> {
        self.notices.lock().clone()
    }

    fn record_dispatches(&self, batch: &[SmsDispatch]) {
        self.dispatches.lock().extend_from_slice(batch);
    }

    fn record_notice(&self, notice: StewardNotice) {
        self.notices.lock().push(notice);
    }
}

/// Outbound SMS provider.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Queue `body` for every recipient under one batch id.
    async fn dispatch(
        &self,
        batch_id: Uuid,
        recipients: &[String],
        body: &str,
    ) -> Result<Vec<SmsDispatch>>;
}

/// SMS gateway that records into the session outbox.
pub struct OutboxSmsGateway {
    outbox: Arc<Outbox>,
    clock: Arc<dyn PhysicalTimeEffects>,
}

impl OutboxSmsGateway {
    /// Gateway recording into `outbox`.
    pub fn new(outbox: Arc<Outbox>, clock: Arc<dyn PhysicalTimeEffects>) -> Self {
        Self { outbox, clock }
    }
}

#[async_trait]
impl SmsGateway for OutboxSmsGateway {
    async fn dispatch(
        &self,
        batch_id: Uuid,
        recipients: &[String],
        body: &str,
    ) -> Result<Vec<SmsDispatch>> {
        let created_at = self.clock.physical_time().await;
        let batch: Vec<SmsDispatch> = recipients
            .iter()
            .enumerate()
            .map(|(i, recipient)| SmsDispatch {
                id: format!("{batch_id}-{i}"),
                batch_id,
                recipient: recipient.clone(),
                body: body.to_string(),
                status: SmsStatus::Queued,
                created_at,
            })
            .collect();
        self.outbox.record_dispatches(&batch);
        tracing::info!(%batch_id, recipients = batch.len(), "sms batch queued (not delivered)");
        Ok(batch)
    }
}

/// Who a bulk message goes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Audience {
    /// Every active member of every class
    AllActiveMembers,
    /// Active members of one class
    Class(String),
    /// Explicit phone numbers
    Numbers(Vec<String>),
}

/// Recipient counts shown on the bulk messaging page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSizes {
    /// Active members across all classes
    pub all_active: usize,
    /// Active members per class id
    pub by_class: BTreeMap<String, usize>,
}

/// Bulk messaging over an [`SmsGateway`].
#[derive(Clone)]
pub struct MessagingService {
    gateway: Arc<dyn Gateway>,
    sms: Arc<dyn SmsGateway>,
    outbox: Arc<Outbox>,
    clock: Arc<dyn PhysicalTimeEffects>,
}

impl MessagingService {
    /// Service sending through `sms`; notices go to `outbox`.
    pub fn new(
        gateway: Arc<dyn Gateway>,
        sms: Arc<dyn SmsGateway>,
        outbox: Arc<Outbox>,
        clock: Arc<dyn PhysicalTimeEffects>,
    ) -> Self {
        Self {
            gateway,
            sms,
            outbox,
            clock,
        }
    }

    /// Service whose SMS and notices all land in `outbox`.
    pub fn with_outbox(
        gateway: Arc<dyn Gateway>,
        clock: Arc<dyn PhysicalTimeEffects>,
        outbox: Arc<Outbox>,
    ) -> Self {
        let sms = Arc::new(OutboxSmsGateway::new(outbox.clone(), clock.clone()));
        Self::new(gateway, sms, outbox, clock)
    }

    async fn active_members(&self) -> Result<Vec<Member>> {
        Ok(ReadRepository::<Member>::list(&*self.gateway)
            .await?
            .into_iter()
            .filter(|m| m.status == MemberStatus::Active)
            .collect())
    }

    /// Phone numbers for `audience`, deduplicated in first-seen order.
    pub async fn resolve_audience(&self, audience: &Audience) -> Result<Vec<String>> {
        let numbers: Vec<String> = match audience {
            Audience::AllActiveMembers => self
                .active_members()
                .await?
                .into_iter()
                .map(|m| m.phone)
                .collect(),
            Audience::Class(class_id) => self
                .active_members()
                .await?
                .into_iter()
                .filter(|m| &m.class_id == class_id)
                .map(|m| m.phone)
                .collect(),
            Audience::Numbers(numbers) => numbers.clone(),
        };

        let mut seen = Vec::with_capacity(numbers.len());
        for number in numbers {
            let number: String = number.chars().filter(|c| !c.is_whitespace()).collect();
            if !number.is_empty() && !seen.contains(&number) {
                seen.push(number);
            }
        }
        Ok(seen)
    }

    /// Active-member counts for the audience picker.
    pub async fn audience_sizes(&self) -> Result<AudienceSizes> {
        let members = self.active_members().await?;
        let mut by_class = BTreeMap::new();
        for member in &members {
            *by_class.entry(member.class_id.clone()).or_insert(0) += 1;
        }
        Ok(AudienceSizes {
            all_active: members.len(),
            by_class,
        })
    }

    /// Send `body` to everyone in `audience`.
    pub async fn send_bulk(&self, actor: &User, audience: &Audience, body: &str) -> Result<SmsBatch> {
        require(actor, Capability::BulkMessaging, "send bulk SMS")?;
        require_text("message", body)?;

        let recipients = self.resolve_audience(audience).await?;
        if recipients.is_empty() {
            return Err(FellowshipError::invalid("audience has no phone numbers"));
        }

        let batch_id = Uuid::new_v4();
        let dispatches = self.sms.dispatch(batch_id, &recipients, body).await?;
        tracing::info!(sender = %actor.id, %batch_id, recipients = dispatches.len(), "bulk message sent");
        Ok(SmsBatch {
            batch_id,
            dispatches,
        })
    }

    /// Record a notice for the stewards.
    pub async fn notify_stewards(
        &self,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> StewardNotice {
        let notice = StewardNotice {
            subject: subject.into(),
            body: body.into(),
            created_at: self.clock.physical_time().await,
        };
        tracing::info!(subject = %notice.subject, "steward notification (not delivered)");
        self.outbox.record_notice(notice.clone());
        notice
    }

    /// The session outbox.
    pub fn outbox(&self) -> &Arc<Outbox> {
        &self.outbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctuary_core::Role;
    use sanctuary_store::{MockStore, DEMO_CLASS_ID};
    use sanctuary_testkit::{user_with_role, FixedClock};

    fn service() -> MessagingService {
        let clock = Arc::new(FixedClock::default());
        let gateway: Arc<dyn Gateway> = Arc::new(MockStore::seeded(clock.clone()));
        MessagingService::with_outbox(gateway, clock, Arc::new(Outbox::default()))
    }

    #[tokio::test]
    async fn test_inactive_members_excluded() {
        let messaging = service();
        let sizes = messaging.audience_sizes().await.unwrap();
        assert_eq!(sizes.all_active, 7);
        assert_eq!(sizes.by_class.get(DEMO_CLASS_ID), Some(&3));

        let class = messaging
            .resolve_audience(&Audience::Class(DEMO_CLASS_ID.into()))
            .await
            .unwrap();
        assert_eq!(class.len(), 3);
    }

    #[tokio::test]
    async fn test_explicit_numbers_deduplicated() {
        let messaging = service();
        let numbers = messaging
            .resolve_audience(&Audience::Numbers(vec![
                "+233 24 400 0101".into(),
                "+233244000101".into(),
                "  ".into(),
                "+233244000999".into(),
            ]))
            .await
            .unwrap();
        assert_eq!(numbers, vec!["+233244000101", "+233244000999"]);
    }

    #[tokio::test]
    async fn test_bulk_send_records_outbox() {
        let messaging = service();
        let batch = messaging
            .send_bulk(
                &user_with_role(Role::RevMinister),
                &Audience::AllActiveMembers,
                "Harvest is on Sunday",
            )
            .await
            .unwrap();

        assert_eq!(batch.dispatches.len(), 7);
        assert!(batch.dispatches.iter().all(|d| d.batch_id == batch.batch_id));
        assert!(batch.dispatches.iter().all(|d| d.status == SmsStatus::Queued));
        assert_eq!(messaging.outbox().dispatches(), batch.dispatches);
    }

    #[tokio::test]
    async fn test_bulk_send_denied_for_members() {
        let messaging = service();
        for role in [Role::Member, Role::ClassLeader] {
            let err = messaging
                .send_bulk(&user_with_role(role), &Audience::AllActiveMembers, "Hi")
                .await
                .unwrap_err();
            assert!(err.is_permission_denied());
        }
        assert!(messaging.outbox().dispatches().is_empty());
    }

    #[tokio::test]
    async fn test_empty_audience_rejected() {
        let messaging = service();
        let err = messaging
            .send_bulk(
                &user_with_role(Role::Admin),
                &Audience::Class("cls_unknown".into()),
                "Hello",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FellowshipError::Invalid { .. }));
    }
}
