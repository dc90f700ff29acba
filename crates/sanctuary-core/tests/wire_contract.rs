//! Wire contract for records exchanged with web frontends.
//!
//! Field names are camelCase and optional fields are omitted when empty, so
//! the JSON matches what the existing web client reads.

use chrono::NaiveDate;
use sanctuary_core::types::{
    Announcement, AnnouncementCategory, PrayerRequest, PrayerStatus, User,
};
use sanctuary_core::Role;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn announcement_serializes_camel_case() {
    let a = Announcement {
        id: "a1".into(),
        title: "Harvest".into(),
        category: AnnouncementCategory::Video,
        content: "Watch the recap".into(),
        date: date(2026, 10, 4),
        is_featured: true,
        media_url: Some("https://example.org/harvest.mp4".into()),
        image_url: None,
    };

    let value = serde_json::to_value(&a).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "a1",
            "title": "Harvest",
            "category": "Video",
            "content": "Watch the recap",
            "date": "2026-10-04",
            "isFeatured": true,
            "mediaUrl": "https://example.org/harvest.mp4",
        })
    );
}

#[test]
fn user_without_class_omits_class_fields() {
    let user = User {
        id: "u1".into(),
        name: "Kofi Boateng".into(),
        role: Role::SocietySteward,
        class_name: None,
        class_id: None,
        email: "kofi@example.org".into(),
        phone_number: None,
    };

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["role"], "society_steward");
    assert!(value.get("classId").is_none());
    assert!(value.get("phoneNumber").is_none());
}

#[test]
fn prayer_request_reads_web_payload() {
    let payload = json!({
        "id": "pr1",
        "requester": "Esi",
        "request": "Travel mercies",
        "date": "2026-10-12",
        "status": "In-Progress",
    });

    let req: PrayerRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(req.status, PrayerStatus::InProgress);
    assert!(!req.is_anonymous);
    assert!(req.submitted_by.is_none());
}
