//! Authorization policy for portal features.
//!
//! Every role check in the app goes through [`Capability`]:
//! - [`Capability::allows`]: the role-to-capability table
//! - [`require`]: pre-check for service operations, fails with `PermissionDenied`
//! - [`gate`]: wraps page content in [`Access`] for gated pages
//!
//! Class management is additionally scoped: a class leader may only manage
//! their own class ([`can_manage_class`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use sanctuary_core::types::User;
use sanctuary_core::{FellowshipError, Result, Role};

/// Something a role may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Open the portal
    ViewPortal,
    /// Submit prayer requests, sick reports and minister messages
    SubmitMinistryForms,
    /// Manage class members and attendance
    ManageClass,
    /// Post and remove announcements
    ManageAnnouncements,
    /// Plan Sunday services
    PlanServices,
    /// Read and follow up pastoral submissions
    PastoralCare,
    /// Send bulk SMS
    BulkMessaging,
}

impl Capability {
    /// Every capability.
    pub const ALL: [Capability; 7] = [
        Self::ViewPortal,
        Self::SubmitMinistryForms,
        Self::ManageClass,
        Self::ManageAnnouncements,
        Self::PlanServices,
        Self::PastoralCare,
        Self::BulkMessaging,
    ];

    /// Whether `role` holds this capability.
    pub fn allows(&self, role: Role) -> bool {
        use Role::*;
        match self {
            Self::ViewPortal | Self::SubmitMinistryForms => true,
            Self::ManageClass => matches!(role, ClassLeader | SocietySteward | RevMinister | Admin),
            Self::ManageAnnouncements => matches!(role, SocietySteward | Admin),
            Self::PlanServices | Self::PastoralCare | Self::BulkMessaging => {
                matches!(role, SocietySteward | RevMinister | Admin)
            }
        }
    }

    /// Roles holding this capability, in [`Role::ALL`] order.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.allows(*r)).collect()
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ViewPortal => "the portal",
            Self::SubmitMinistryForms => "ministry forms",
            Self::ManageClass => "class management",
            Self::ManageAnnouncements => "announcement management",
            Self::PlanServices => "service planning",
            Self::PastoralCare => "pastoral care",
            Self::BulkMessaging => "bulk messaging",
        }
    }

    /// Notice shown in place of gated content.
    pub fn denial_notice(&self) -> String {
        let roles: Vec<&str> = self.roles().iter().map(|r| r.label()).collect();
        format!(
            "Access to {} is restricted to: {}.",
            self.description(),
            roles.join(", ")
        )
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Content of a gated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum Access<T> {
    /// The role may see the content
    Granted {
        /// Page content
        content: T,
    },
    /// The role may not; show the notice instead
    Denied {
        /// Names the roles that may
        notice: String,
    },
}

impl<T> Access<T> {
    /// Whether the content is visible.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// The content, when granted.
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Granted { content } => Some(content),
            Self::Denied { .. } => None,
        }
    }
}

/// Fail with `PermissionDenied` unless `user` holds `capability`.
pub fn require(user: &User, capability: Capability, operation: &str) -> Result<()> {
    if capability.allows(user.role) {
        return Ok(());
    }
    tracing::warn!(user = %user.id, role = %user.role, %capability, operation, "access denied");
    Err(FellowshipError::permission_denied(format!(
        "{operation} requires {capability}"
    )))
}

/// Whether `user` may manage the members and attendance of `class_id`.
pub fn can_manage_class(user: &User, class_id: &str) -> bool {
    match user.role {
        Role::ClassLeader => user.in_class(class_id),
        role => Capability::ManageClass.allows(role),
    }
}

/// Fail with `PermissionDenied` unless `user` may manage `class_id`.
pub fn require_class(user: &User, class_id: &str, operation: &str) -> Result<()> {
    if can_manage_class(user, class_id) {
        return Ok(());
    }
    tracing::warn!(user = %user.id, role = %user.role, class_id, operation, "class access denied");
    Err(FellowshipError::permission_denied(format!(
        "{operation} requires leadership of class {class_id}"
    )))
}

/// Build gated page content only when the role holds `capability`.
pub async fn gate<T, F, Fut>(user: &User, capability: Capability, load: F) -> Result<Access<T>>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    if !capability.allows(user.role) {
        tracing::warn!(user = %user.id, role = %user.role, %capability, "page access denied");
        return Ok(Access::Denied {
            notice: capability.denial_notice(),
        });
    }
    Ok(Access::Granted {
        content: load().await?,
    })
}

/// Like [`gate`] for [`Capability::ManageClass`], but also denies a
/// `class_id` the user holds the capability for yet may not manage.
pub async fn gate_class<T, F, Fut>(
    user: &User,
    class_id: Option<&str>,
    load: F,
) -> Result<Access<T>>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    if let Some(class_id) = class_id {
        if Capability::ManageClass.allows(user.role) && !can_manage_class(user, class_id) {
            tracing::warn!(user = %user.id, role = %user.role, class_id, "class page access denied");
            return Ok(Access::Denied {
                notice: format!(
                    "Class {class_id} is managed by its own class leader and the society leadership."
                ),
            });
        }
    }
    gate(user, Capability::ManageClass, load).await
}
