//! # Services
//!
//! Thin namespaces over the gateway. Each service owns an
//! `Arc<dyn Gateway>` clone; privileged operations take the acting user and
//! check the authorization policy before touching the gateway.

mod admin;
mod class;
mod content;
mod messaging;
mod user;

pub use admin::AdminService;
pub use class::ClassService;
pub use content::{ContentService, VerseOfTheDay};
pub use messaging::{
    Audience, AudienceSizes, MessagingService, Outbox, OutboxSmsGateway, SmsBatch, SmsDispatch,
    SmsGateway, SmsStatus, StewardNotice,
};
pub use user::UserService;

use sanctuary_core::{FellowshipError, Result};

/// Reject blank required form fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FellowshipError::invalid(format!("{field} is required")));
    }
    Ok(())
}
