//! # Roles
//!
//! The closed set of user categories that decide which portal features and
//! navigation links a user sees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FellowshipError;

/// User role within the society.
///
/// `Admin` is a first-class role: the login role picker offers it and the
/// bulk messaging gate admits it, so it is modelled here rather than left as
/// a stray string at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary church member
    #[default]
    Member,
    /// Leader of one class meeting
    ClassLeader,
    /// Society steward (content and service management)
    SocietySteward,
    /// Reverend minister (pastoral care)
    RevMinister,
    /// Application administrator
    Admin,
}

impl Role {
    /// Every role, in the order the role picker lists them.
    pub const ALL: [Role; 5] = [
        Role::Member,
        Role::ClassLeader,
        Role::SocietySteward,
        Role::RevMinister,
        Role::Admin,
    ];

    /// Wire identifier, as stored on the user record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::ClassLeader => "class_leader",
            Self::SocietySteward => "society_steward",
            Self::RevMinister => "rev_minister",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::ClassLeader => "Class Leader",
            Self::SocietySteward => "Society Steward",
            Self::RevMinister => "Rev. Minister",
            Self::Admin => "Administrator",
        }
    }

    /// Whether the role belongs to the society leadership (stewards,
    /// ministers and admins).
    pub fn is_leadership(&self) -> bool {
        matches!(self, Self::SocietySteward | Self::RevMinister | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FellowshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| FellowshipError::invalid(format!("unknown role: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_accepts_dashes() {
        assert_eq!("class-leader".parse::<Role>().unwrap(), Role::ClassLeader);
        assert!("bishop".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::RevMinister).unwrap();
        assert_eq!(json, "\"rev_minister\"");
    }
}
