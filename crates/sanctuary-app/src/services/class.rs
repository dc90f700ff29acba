//! Class registers and attendance, scoped by [`can_manage_class`].
//!
//! [`can_manage_class`]: crate::authorization::can_manage_class

use std::sync::Arc;

use sanctuary_core::types::{AttendanceDraft, AttendanceRecord, Member, MemberStatus, User};
use sanctuary_core::{Gateway, ReadRepository, Result, StatusRepository, WriteRepository};

use super::require_text;
use crate::authorization::{can_manage_class, require_class};

/// Class members and attendance.
#[derive(Clone)]
pub struct ClassService {
    gateway: Arc<dyn Gateway>,
}

impl ClassService {
    /// Service over `gateway`.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Class ids `actor` may manage, sorted.
    pub async fn manageable_classes(&self, actor: &User) -> Result<Vec<String>> {
        let mut ids: Vec<String> = ReadRepository::<Member>::list(&*self.gateway)
            .await?
            .into_iter()
            .map(|m| m.class_id)
            .filter(|id| can_manage_class(actor, id))
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    /// Members of `class_id`, by register number.
    pub async fn members(&self, actor: &User, class_id: &str) -> Result<Vec<Member>> {
        require_class(actor, class_id, "view class register")?;
        let mut members: Vec<Member> = ReadRepository::<Member>::list(&*self.gateway)
            .await?
            .into_iter()
            .filter(|m| m.class_id == class_id)
            .collect();
        members.sort_by(|a, b| a.class_number.cmp(&b.class_number));
        Ok(members)
    }

    /// Mark a member active or inactive. Returns whether the member exists.
    pub async fn set_member_status(
        &self,
        actor: &User,
        member_id: &str,
        status: MemberStatus,
    ) -> Result<bool> {
        let Some(member) = ReadRepository::<Member>::get(&*self.gateway, member_id).await? else {
            return Ok(false);
        };
        require_class(actor, &member.class_id, "update member status")?;
        StatusRepository::<Member>::update_status(&*self.gateway, member_id, status).await
    }

    /// Attendance history of `class_id`, most recent meeting first.
    pub async fn attendance(&self, actor: &User, class_id: &str) -> Result<Vec<AttendanceRecord>> {
        require_class(actor, class_id, "view attendance")?;
        let mut records: Vec<AttendanceRecord> =
            ReadRepository::<AttendanceRecord>::list(&*self.gateway)
                .await?
                .into_iter()
                .filter(|r| r.class_id == class_id)
                .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Take a register. Member ids are recorded as given.
    pub async fn record_attendance(
        &self,
        actor: &User,
        mut draft: AttendanceDraft,
    ) -> Result<AttendanceRecord> {
        require_text("class", &draft.class_id)?;
        require_class(actor, &draft.class_id, "record attendance")?;
        if draft.recorded_by.trim().is_empty() {
            draft.recorded_by = actor.name.clone();
        }
        let record = WriteRepository::<AttendanceRecord>::create(&*self.gateway, draft).await?;
        tracing::info!(
            class_id = %record.class_id,
            present = record.present_member_ids.len(),
            "attendance recorded"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctuary_core::Role;
    use sanctuary_store::{MockStore, DEMO_CLASS_ID};
    use sanctuary_testkit::{attendance_draft, user_with_role, FixedClock};

    fn service() -> ClassService {
        ClassService::new(Arc::new(MockStore::seeded(Arc::new(FixedClock::default()))))
    }

    fn bethel_leader() -> User {
        let mut leader = user_with_role(Role::ClassLeader);
        leader.class_id = Some(DEMO_CLASS_ID.into());
        leader
    }

    #[tokio::test]
    async fn test_leader_sees_own_register() {
        let classes = service();
        let members = classes.members(&bethel_leader(), DEMO_CLASS_ID).await.unwrap();
        assert_eq!(members.len(), 4);
        assert!(members.windows(2).all(|w| w[0].class_number <= w[1].class_number));

        assert_eq!(
            classes.manageable_classes(&bethel_leader()).await.unwrap(),
            vec![DEMO_CLASS_ID]
        );
        assert_eq!(
            classes
                .manageable_classes(&user_with_role(Role::Admin))
                .await
                .unwrap(),
            vec![DEMO_CLASS_ID, "cls_ebenezer"]
        );

        let err = classes
            .members(&bethel_leader(), "cls_ebenezer")
            .await
            .unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[tokio::test]
    async fn test_unreferenced_ids_are_recorded() {
        let classes = service();
        let record = classes
            .record_attendance(&bethel_leader(), attendance_draft(DEMO_CLASS_ID, &["m1", "m404"]))
            .await
            .unwrap();
        assert_eq!(record.present_member_ids, vec!["m1", "m404"]);

        let history = classes.attendance(&bethel_leader(), DEMO_CLASS_ID).await.unwrap();
        assert_eq!(history[0], record);
        assert_eq!(history.len(), 3);
    }

    #[tokio::test]
    async fn test_member_status_scoped_to_class() {
        let classes = service();
        assert!(classes
            .set_member_status(&bethel_leader(), "m2", MemberStatus::Inactive)
            .await
            .unwrap());
        assert!(!classes
            .set_member_status(&bethel_leader(), "missing", MemberStatus::Inactive)
            .await
            .unwrap());

        let err = classes
            .set_member_status(&bethel_leader(), "m5", MemberStatus::Inactive)
            .await
            .unwrap_err();
        assert!(err.is_permission_denied());

        let steward = user_with_role(Role::SocietySteward);
        assert!(classes
            .set_member_status(&steward, "m5", MemberStatus::Inactive)
            .await
            .unwrap());
    }
}
