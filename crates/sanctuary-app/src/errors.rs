//! Categorized application errors
//!
//! Maps [`FellowshipError`] onto what a frontend needs to show:
//! - a category for consistent UI treatment
//! - an alert severity
//! - a resolution hint for errors the user can act on

use serde::{Deserialize, Serialize};
use std::fmt;

use sanctuary_core::FellowshipError;

/// Severity of an alert shown after a form submission or action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Confirmation or neutral feedback
    Info,
    /// Something needs attention but nothing was lost
    Warning,
    /// The action failed
    Error,
}

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Form input the user can correct
    Input,
    /// The current role may not do this
    Permission,
    /// The record no longer exists
    NotFound,
    /// Device-local storage failed (theme, logo)
    Storage,
    /// General operation failures (catch-all)
    Operation,
}

impl ErrorCategory {
    /// Category of a core error.
    #[must_use]
    pub fn of(err: &FellowshipError) -> Self {
        match err {
            FellowshipError::Invalid { .. } => Self::Input,
            FellowshipError::PermissionDenied { .. } => Self::Permission,
            FellowshipError::NotFound { .. } => Self::NotFound,
            FellowshipError::Storage { .. } => Self::Storage,
            FellowshipError::Serialization { .. } | FellowshipError::Internal { .. } => {
                Self::Operation
            }
        }
    }

    /// Whether the user can fix this by changing what they entered.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Alert severity for this category.
    #[must_use]
    pub fn alert_level(&self) -> AlertLevel {
        match self {
            Self::Input => AlertLevel::Info,
            Self::Permission => AlertLevel::Error,
            Self::NotFound => AlertLevel::Warning,
            Self::Storage => AlertLevel::Warning,
            Self::Operation => AlertLevel::Error,
        }
    }

    /// Short label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Permission => "Permission",
            Self::NotFound => "Not Found",
            Self::Storage => "Storage",
            Self::Operation => "Operation",
        }
    }

    /// What the user can do about it.
    #[must_use]
    pub fn resolution_hint(&self) -> &'static str {
        match self {
            Self::Input => "Check the form and try again",
            Self::Permission => "Switch to a role that can perform this action",
            Self::NotFound => "The item may have been removed; refresh the page",
            Self::Storage => "Your preference could not be saved on this device",
            Self::Operation => "Something went wrong; please try again",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feedback a frontend shows after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity
    pub level: AlertLevel,
    /// Message text
    pub message: String,
    /// Optional hint for resolving an error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Alert {
    /// Confirmation of a successful action.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            message: message.into(),
            hint: None,
        }
    }

    /// Alert describing a failed action.
    pub fn from_error(err: &FellowshipError) -> Self {
        let category = ErrorCategory::of(err);
        Self {
            level: category.alert_level(),
            message: err.to_string(),
            hint: Some(category.resolution_hint().to_string()),
        }
    }

    /// Alert for the outcome of an action.
    pub fn from_result<T>(
        result: &Result<T, FellowshipError>,
        success: impl Into<String>,
    ) -> Self {
        match result {
            Ok(_) => Self::success(success),
            Err(err) => Self::from_error(err),
        }
    }
}
