//! # People and Organization Records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Creatable, Tracked};
use crate::role::Role;
use crate::time::PhysicalTime;

/// Application user (the person holding the phone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Current role
    pub role: Role,
    /// Class meeting name, when the user belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Class meeting id, when the user belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    /// Email address
    pub email: String,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    /// Whether the user leads or belongs to the given class.
    pub fn in_class(&self, class_id: &str) -> bool {
        self.class_id.as_deref() == Some(class_id)
    }

    /// First name for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Membership status of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MemberStatus {
    /// Attending and in good standing
    #[default]
    Active,
    /// Lapsed or moved away
    Inactive,
}

/// A member on a class register. Membership is denormalized: the class is
/// identified only by `class_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identifier
    pub id: String,
    /// Full name
    pub full_name: String,
    /// Class meeting id
    pub class_id: String,
    /// Register number within the class
    pub class_number: String,
    /// Phone number used for bulk messaging
    pub phone: String,
    /// Membership status
    pub status: MemberStatus,
}

impl Tracked for Member {
    type Status = MemberStatus;

    fn status(&self) -> MemberStatus {
        self.status
    }

    fn set_status(&mut self, status: MemberStatus) {
        self.status = status;
    }
}

/// One class meeting's attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Record identifier
    pub id: String,
    /// Class meeting id (not validated)
    pub class_id: String,
    /// Meeting date
    pub date: NaiveDate,
    /// Members marked present (not validated)
    pub present_member_ids: Vec<String>,
    /// Who took the register
    pub recorded_by: String,
}

/// Fields supplied when taking a register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    /// Class meeting id
    pub class_id: String,
    /// Meeting date; defaults to the creation date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Members marked present
    pub present_member_ids: Vec<String>,
    /// Who took the register
    pub recorded_by: String,
}

impl Creatable for AttendanceRecord {
    type Draft = AttendanceDraft;

    fn from_draft(id: String, at: PhysicalTime, draft: AttendanceDraft) -> Self {
        Self {
            id,
            class_id: draft.class_id,
            date: draft.date.unwrap_or_else(|| at.date()),
            present_member_ids: draft.present_member_ids,
            recorded_by: draft.recorded_by,
        }
    }
}

/// A branch (society) of the circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchBranch {
    /// Branch identifier
    pub id: String,
    /// Branch name
    pub name: String,
    /// Town or address
    pub location: String,
    /// Minister in charge
    pub minister: String,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A church organization (choir, youth fellowship, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization identifier
    pub id: String,
    /// Organization name
    pub name: String,
    /// What the organization does
    pub description: String,
    /// Leader's name
    pub leader: String,
    /// Regular meeting day
    pub meeting_day: String,
}

crate::impl_entity! {
    User => User,
    Member => Member,
    AttendanceRecord => AttendanceRecord,
    ChurchBranch => ChurchBranch,
    Organization => Organization,
}
