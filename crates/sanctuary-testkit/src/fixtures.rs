//! Record and draft fixtures
//!
//! Small builders for the drafts tests submit most often. Values are
//! plausible but arbitrary; tests that care about a field set it explicitly.

use chrono::NaiveDate;
use sanctuary_core::types::{
    AnnouncementCategory, AnnouncementDraft, AttendanceDraft, MinisterMessageDraft,
    PrayerRequestDraft, SickReportDraft, User,
};
use sanctuary_core::Role;

/// Reference "today" matching [`FixedClock::default`](crate::FixedClock).
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// General announcement with the given title.
pub fn announcement_draft(title: &str) -> AnnouncementDraft {
    AnnouncementDraft::new(title, "Body", AnnouncementCategory::General)
}

/// Named (non-anonymous) prayer request.
pub fn prayer_draft(requester: &str, request: &str) -> PrayerRequestDraft {
    PrayerRequestDraft {
        requester: requester.to_string(),
        request: request.to_string(),
        is_anonymous: false,
        submitted_by: None,
    }
}

/// Sick report filed by `reported_by`.
pub fn sick_report_draft(member_name: &str, reported_by: &str) -> SickReportDraft {
    SickReportDraft {
        member_name: member_name.to_string(),
        class_name: None,
        details: "Unwell".to_string(),
        location: "Home".to_string(),
        reported_by: reported_by.to_string(),
    }
}

/// Message to the minister.
pub fn minister_message_draft(sender_name: &str, subject: &str) -> MinisterMessageDraft {
    MinisterMessageDraft {
        sender_name: sender_name.to_string(),
        sender_role: None,
        subject: subject.to_string(),
        body: "Please call me.".to_string(),
    }
}

/// Register for `class_id` with the given members present.
pub fn attendance_draft(class_id: &str, present: &[&str]) -> AttendanceDraft {
    AttendanceDraft {
        class_id: class_id.to_string(),
        date: None,
        present_member_ids: present.iter().map(|id| id.to_string()).collect(),
        recorded_by: "Test Leader".to_string(),
    }
}

/// User holding `role`, outside any class.
pub fn user_with_role(role: Role) -> User {
    User {
        id: format!("test_{}", role.as_str()),
        name: "Test User".to_string(),
        role,
        class_name: None,
        class_id: None,
        email: "test@example.org".to_string(),
        phone_number: None,
    }
}
