//! Pastoral submissions and the service planner.
//!
//! Anyone may submit the ministry forms; reading them and following them up
//! requires [`Capability::PastoralCare`]. Sick reports notify the stewards
//! through the outbox.

use std::sync::Arc;

use sanctuary_core::types::{
    MinisterMessage, MinisterMessageDraft, PrayerRequest, PrayerRequestDraft, PrayerStatus,
    SickReport, SickReportDraft, SundayService, SundayServiceDraft, User,
};
use sanctuary_core::{Gateway, ReadRepository, Result, StatusRepository, WriteRepository};

use super::messaging::MessagingService;
use super::require_text;
use crate::authorization::{require, Capability};

/// Prayer requests, sick reports, minister messages and service plans.
#[derive(Clone)]
pub struct AdminService {
    gateway: Arc<dyn Gateway>,
    messaging: MessagingService,
}

impl AdminService {
    /// Service over `gateway`; sick reports notify through `messaging`.
    pub fn new(gateway: Arc<dyn Gateway>, messaging: MessagingService) -> Self {
        Self { gateway, messaging }
    }

    /// Every prayer request, newest first.
    pub async fn prayer_requests(&self, actor: &User) -> Result<Vec<PrayerRequest>> {
        require(actor, Capability::PastoralCare, "read prayer requests")?;
        ReadRepository::<PrayerRequest>::list(&*self.gateway).await
    }

    /// Submit a prayer request on behalf of `actor`.
    pub async fn submit_prayer_request(
        &self,
        actor: &User,
        mut draft: PrayerRequestDraft,
    ) -> Result<PrayerRequest> {
        require(actor, Capability::SubmitMinistryForms, "submit prayer request")?;
        require_text("request", &draft.request)?;
        if draft.requester.trim().is_empty() {
            draft.requester = actor.name.clone();
        }
        draft.submitted_by.get_or_insert_with(|| actor.id.clone());
        WriteRepository::<PrayerRequest>::create(&*self.gateway, draft).await
    }

    /// Move a prayer request to `status`. Returns whether it exists.
    pub async fn update_prayer_status(
        &self,
        actor: &User,
        id: &str,
        status: PrayerStatus,
    ) -> Result<bool> {
        require(actor, Capability::PastoralCare, "update prayer request")?;
        StatusRepository::<PrayerRequest>::update_status(&*self.gateway, id, status).await
    }

    /// Every sick report, newest first.
    pub async fn sick_reports(&self, actor: &User) -> Result<Vec<SickReport>> {
        require(actor, Capability::PastoralCare, "read sick reports")?;
        ReadRepository::<SickReport>::list(&*self.gateway).await
    }

    /// File a sick report and notify the stewards.
    pub async fn submit_sick_report(
        &self,
        actor: &User,
        mut draft: SickReportDraft,
    ) -> Result<SickReport> {
        require(actor, Capability::SubmitMinistryForms, "submit sick report")?;
        require_text("member name", &draft.member_name)?;
        require_text("location", &draft.location)?;
        if draft.reported_by.trim().is_empty() {
            draft.reported_by = actor.name.clone();
        }
        if draft.class_name.is_none() {
            draft.class_name = actor.class_name.clone();
        }

        let report = WriteRepository::<SickReport>::create(&*self.gateway, draft).await?;
        self.messaging
            .notify_stewards(
                format!("Sick report: {}", report.member_name),
                format!(
                    "{} reported by {} at {}",
                    report.details, report.reported_by, report.location
                ),
            )
            .await;
        Ok(report)
    }

    /// Every minister message, newest first.
    pub async fn minister_messages(&self, actor: &User) -> Result<Vec<MinisterMessage>> {
        require(actor, Capability::PastoralCare, "read minister messages")?;
        ReadRepository::<MinisterMessage>::list(&*self.gateway).await
    }

    /// Send a private message to the minister.
    pub async fn send_minister_message(
        &self,
        actor: &User,
        mut draft: MinisterMessageDraft,
    ) -> Result<MinisterMessage> {
        require(actor, Capability::SubmitMinistryForms, "message the minister")?;
        require_text("subject", &draft.subject)?;
        require_text("message", &draft.body)?;
        if draft.sender_name.trim().is_empty() {
            draft.sender_name = actor.name.clone();
        }
        draft.sender_role.get_or_insert(actor.role);
        WriteRepository::<MinisterMessage>::create(&*self.gateway, draft).await
    }

    /// Save a Sunday service plan.
    pub async fn save_service_plan(
        &self,
        actor: &User,
        draft: SundayServiceDraft,
    ) -> Result<SundayService> {
        require(actor, Capability::PlanServices, "save service plan")?;
        require_text("theme", &draft.theme)?;
        require_text("preacher", &draft.preacher)?;
        let service = WriteRepository::<SundayService>::create(&*self.gateway, draft).await?;
        tracing::info!(id = %service.id, date = %service.date, "service plan saved");
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Outbox;
    use sanctuary_core::Role;
    use sanctuary_store::MockStore;
    use sanctuary_testkit::{
        minister_message_draft, prayer_draft, sick_report_draft, user_with_role, FixedClock,
    };

    fn service() -> (AdminService, Arc<Outbox>) {
        let clock = Arc::new(FixedClock::default());
        let gateway: Arc<dyn Gateway> = Arc::new(MockStore::seeded(clock.clone()));
        let outbox = Arc::new(Outbox::default());
        let messaging = MessagingService::with_outbox(gateway.clone(), clock, outbox.clone());
        (AdminService::new(gateway, messaging), outbox)
    }

    #[tokio::test]
    async fn test_close_prayer_request() {
        let (admin, _) = service();
        let minister = user_with_role(Role::RevMinister);
        let before = admin.prayer_requests(&minister).await.unwrap();

        assert!(admin
            .update_prayer_status(&minister, "pr1", PrayerStatus::Closed)
            .await
            .unwrap());
        assert!(!admin
            .update_prayer_status(&minister, "nope", PrayerStatus::Closed)
            .await
            .unwrap());

        let after = admin.prayer_requests(&minister).await.unwrap();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if old.id == "pr1" {
                assert_eq!(new.status, PrayerStatus::Closed);
                assert_eq!(new.request, old.request);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[tokio::test]
    async fn test_member_submits_but_cannot_read() {
        let (admin, _) = service();
        let member = user_with_role(Role::Member);

        let created = admin
            .submit_prayer_request(&member, prayer_draft("", "Peace at home"))
            .await
            .unwrap();
        assert_eq!(created.requester, member.name);
        assert_eq!(created.submitted_by.as_deref(), Some(member.id.as_str()));
        assert_eq!(created.status, PrayerStatus::New);

        let err = admin.prayer_requests(&member).await.unwrap_err();
        assert!(err.is_permission_denied());
        let err = admin
            .update_prayer_status(&member, &created.id, PrayerStatus::Closed)
            .await
            .unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[tokio::test]
    async fn test_sick_report_notifies_stewards() {
        let (admin, outbox) = service();
        let member = user_with_role(Role::Member);

        let report = admin
            .submit_sick_report(&member, sick_report_draft("Yaw Darko", ""))
            .await
            .unwrap();

        assert_eq!(report.reported_by, member.name);
        let notices = outbox.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].subject.contains("Yaw Darko"));
    }

    #[tokio::test]
    async fn test_minister_message_records_sender_role() {
        let (admin, _) = service();
        let leader = user_with_role(Role::ClassLeader);
        let message = admin
            .send_minister_message(&leader, minister_message_draft("", "Visit"))
            .await
            .unwrap();
        assert_eq!(message.sender_role, Some(Role::ClassLeader));
        assert_eq!(message.sender_name, leader.name);

        let inbox = admin
            .minister_messages(&user_with_role(Role::RevMinister))
            .await
            .unwrap();
        assert_eq!(inbox[0], message);
    }

    #[tokio::test]
    async fn test_service_planner_requires_planning_role() {
        let (admin, _) = service();
        let draft = SundayServiceDraft {
            theme: "Harvest".into(),
            preacher: "Rev. Samuel Boateng".into(),
            ..Default::default()
        };

        let err = admin
            .save_service_plan(&user_with_role(Role::ClassLeader), draft.clone())
            .await
            .unwrap_err();
        assert!(err.is_permission_denied());

        let saved = admin
            .save_service_plan(&user_with_role(Role::SocietySteward), draft)
            .await
            .unwrap();
        assert!(saved.id.starts_with("svc_"));
        assert_eq!(saved.date, sanctuary_testkit::test_today());
    }
}
