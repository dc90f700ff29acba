//! Ministry forms, the pastoral inbox and bulk messaging.

use anyhow::{bail, Result};
use clap::Subcommand;
use serde_json::json;

use sanctuary_app::services::Audience;
use sanctuary_app::AppCore;
use sanctuary_core::types::{
    MinisterMessageDraft, PrayerRequestDraft, PrayerStatus, SickReportDraft,
};

use super::print_json;

/// `sanctuary prayer ...`
#[derive(Debug, Clone, Subcommand)]
pub enum PrayerCommand {
    /// Every prayer request (stewards, ministers, admins)
    List,

    /// Ask the church to pray
    Submit {
        /// What to pray for
        request: String,
        /// Name to show; defaults to yours
        #[arg(long)]
        requester: Option<String>,
        /// Hide the requester's name
        #[arg(long)]
        anonymous: bool,
    },

    /// Move a request along (New, In-Progress, Closed)
    Status {
        /// Request id
        id: String,
        /// New status
        status: PrayerStatus,
    },
}

/// `sanctuary sick ...`
#[derive(Debug, Clone, Subcommand)]
pub enum SickCommand {
    /// Every sick report (stewards, ministers, admins)
    List,

    /// Report a sick member; the stewards are notified
    Submit {
        /// Member's name
        member: String,
        /// Where they can be visited
        #[arg(long)]
        location: String,
        /// What is wrong
        #[arg(long, default_value = "")]
        details: String,
        /// Member's class; defaults to yours
        #[arg(long)]
        class_name: Option<String>,
    },
}

/// `sanctuary message ...`
#[derive(Debug, Clone, Subcommand)]
pub enum MessageCommand {
    /// Send a bulk SMS (stewards, ministers, admins)
    Send {
        /// Message text
        body: String,
        /// Only this class's active members
        #[arg(long, conflicts_with = "to")]
        class: Option<String>,
        /// Explicit phone numbers, comma separated
        #[arg(long, value_delimiter = ',')]
        to: Vec<String>,
    },

    /// Recipient counts per audience
    Audience,

    /// Write to the minister
    Minister {
        /// Subject line
        #[arg(long)]
        subject: String,
        /// Message text
        body: String,
    },
}

/// Dispatch a prayer command.
pub async fn handle_prayer_command(core: &AppCore, cmd: &PrayerCommand) -> Result<()> {
    let user = core.user().await;
    match cmd {
        PrayerCommand::List => print_json(&core.admin().prayer_requests(&user).await?),
        PrayerCommand::Submit {
            request,
            requester,
            anonymous,
        } => {
            let draft = PrayerRequestDraft {
                requester: requester.clone().unwrap_or_default(),
                request: request.clone(),
                is_anonymous: *anonymous,
                submitted_by: None,
            };
            print_json(&core.admin().submit_prayer_request(&user, draft).await?)
        }
        PrayerCommand::Status { id, status } => {
            let updated = core.admin().update_prayer_status(&user, id, *status).await?;
            if !updated {
                bail!("no prayer request with id {id}");
            }
            print_json(&json!({ "id": id, "status": status }))
        }
    }
}

/// Dispatch a sick report command.
pub async fn handle_sick_command(core: &AppCore, cmd: &SickCommand) -> Result<()> {
    let user = core.user().await;
    match cmd {
        SickCommand::List => print_json(&core.admin().sick_reports(&user).await?),
        SickCommand::Submit {
            member,
            location,
            details,
            class_name,
        } => {
            let draft = SickReportDraft {
                member_name: member.clone(),
                class_name: class_name.clone(),
                details: details.clone(),
                location: location.clone(),
                reported_by: String::new(),
            };
            let report = core.admin().submit_sick_report(&user, draft).await?;
            print_json(&json!({ "report": report, "notices": core.outbox().notices() }))
        }
    }
}

fn audience(class: Option<&str>, to: &[String]) -> Audience {
    match class {
        Some(class_id) => Audience::Class(class_id.to_string()),
        None if !to.is_empty() => Audience::Numbers(to.to_vec()),
        None => Audience::AllActiveMembers,
    }
}

/// Dispatch a messaging command.
pub async fn handle_message_command(core: &AppCore, cmd: &MessageCommand) -> Result<()> {
    let user = core.user().await;
    match cmd {
        MessageCommand::Send { body, class, to } => {
            let audience = audience(class.as_deref(), to);
            print_json(&core.messaging().send_bulk(&user, &audience, body).await?)
        }
        MessageCommand::Audience => print_json(&core.messaging().audience_sizes().await?),
        MessageCommand::Minister { subject, body } => {
            let draft = MinisterMessageDraft {
                sender_name: String::new(),
                sender_role: None,
                subject: subject.clone(),
                body: body.clone(),
            };
            print_json(&core.admin().send_minister_message(&user, draft).await?)
        }
    }
}
