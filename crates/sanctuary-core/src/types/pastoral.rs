//! # Pastoral Care Records
//!
//! Submitted through the ministry forms and read in the minister's portal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::{Creatable, Tracked};
use crate::errors::FellowshipError;
use crate::role::Role;
use crate::time::PhysicalTime;

/// Progress of a prayer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrayerStatus {
    /// Not yet seen
    #[default]
    New,
    /// Being prayed over / followed up
    #[serde(rename = "In-Progress")]
    InProgress,
    /// Done
    Closed,
}

impl PrayerStatus {
    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In-Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for PrayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerStatus {
    type Err = FellowshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(&['-', '_', ' '][..], "").as_str() {
            "new" => Ok(Self::New),
            "inprogress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(FellowshipError::invalid(format!("unknown prayer status: {s}"))),
        }
    }
}

/// A prayer request submitted by a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    /// Request identifier
    pub id: String,
    /// Name shown to the minister ("Anonymous" when hidden)
    pub requester: String,
    /// The request
    pub request: String,
    /// Submission date
    pub date: NaiveDate,
    /// Progress
    pub status: PrayerStatus,
    /// Hide the requester's name
    #[serde(default)]
    pub is_anonymous: bool,
    /// Submitting user's id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}

/// Fields supplied on the prayer request form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequestDraft {
    /// Requester name
    pub requester: String,
    /// The request
    pub request: String,
    /// Hide the requester's name
    #[serde(default)]
    pub is_anonymous: bool,
    /// Submitting user's id
    #[serde(default)]
    pub submitted_by: Option<String>,
}

impl Creatable for PrayerRequest {
    type Draft = PrayerRequestDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: PrayerRequestDraft) -> Self {
        let requester = if draft.is_anonymous {
            "Anonymous".to_string()
        } else {
            draft.requester
        };
        Self {
            id,
            requester,
            request: draft.request,
            date: at.date(),
            status: PrayerStatus::New,
            is_anonymous: draft.is_anonymous,
            submitted_by: draft.submitted_by,
        }
    }
}

impl Tracked for PrayerRequest {
    type Status = PrayerStatus;

    fn status(&self) -> PrayerStatus {
        self.status
    }

    fn set_status(&mut self, status: PrayerStatus) {
        self.status = status;
    }
}

/// Report of a sick member needing a visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickReport {
    /// Report identifier
    pub id: String,
    /// Sick member's name
    pub member_name: String,
    /// Class meeting name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Condition / details
    pub details: String,
    /// Home address or hospital ward
    pub location: String,
    /// Who filed the report
    pub reported_by: String,
    /// Report date
    pub date: NaiveDate,
}

/// Fields supplied on the sick report form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickReportDraft {
    /// Sick member's name
    pub member_name: String,
    /// Class meeting name
    #[serde(default)]
    pub class_name: Option<String>,
    /// Condition / details
    pub details: String,
    /// Home address or hospital ward
    pub location: String,
    /// Who filed the report
    pub reported_by: String,
}

impl Creatable for SickReport {
    type Draft = SickReportDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: SickReportDraft) -> Self {
        Self {
            id,
            member_name: draft.member_name,
            class_name: draft.class_name,
            details: draft.details,
            location: draft.location,
            reported_by: draft.reported_by,
            date: at.date(),
        }
    }
}

/// Private message to the minister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterMessage {
    /// Message identifier
    pub id: String,
    /// Sender's name
    pub sender_name: String,
    /// Sender's role at the time of sending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_role: Option<Role>,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
    /// Date sent
    pub date: NaiveDate,
}

/// Fields supplied on the message-the-minister form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterMessageDraft {
    /// Sender's name
    pub sender_name: String,
    /// Sender's role
    #[serde(default)]
    pub sender_role: Option<Role>,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

impl Creatable for MinisterMessage {
    type Draft = MinisterMessageDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: MinisterMessageDraft) -> Self {
        Self {
            id,
            sender_name: draft.sender_name,
            sender_role: draft.sender_role,
            subject: draft.subject,
            body: draft.body,
            date: at.date(),
        }
    }
}

crate::impl_entity! {
    PrayerRequest => PrayerRequest,
    SickReport => SickReport,
    MinisterMessage => MinisterMessage,
}
