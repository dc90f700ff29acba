//! Announcements, hymnal, liturgical calendar and directory commands.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::json;

use sanctuary_app::AppCore;
use sanctuary_core::types::{AnnouncementCategory, AnnouncementDraft, SundayServiceDraft};

use super::print_json;

/// `sanctuary announcements ...`
#[derive(Debug, Clone, Subcommand)]
pub enum AnnouncementCommand {
    /// List announcements, newest first
    List {
        /// Only this category (General, Audio, Video)
        #[arg(long)]
        category: Option<AnnouncementCategory>,
    },

    /// Post an announcement (society stewards and admins)
    Create {
        /// Headline
        #[arg(long)]
        title: String,
        /// Body text
        #[arg(long)]
        content: String,
        /// Category
        #[arg(long, default_value = "General")]
        category: AnnouncementCategory,
        /// Pin to the dashboard
        #[arg(long)]
        featured: bool,
        /// Audio or video link
        #[arg(long)]
        media_url: Option<String>,
    },

    /// Remove an announcement (society stewards and admins)
    Delete {
        /// Announcement id
        id: String,
    },
}

/// Dispatch an announcement command.
pub async fn handle_announcement_command(core: &AppCore, cmd: &AnnouncementCommand) -> Result<()> {
    let user = core.user().await;
    match cmd {
        AnnouncementCommand::List { category } => {
            print_json(&core.content().announcements(*category).await?)
        }
        AnnouncementCommand::Create {
            title,
            content,
            category,
            featured,
            media_url,
        } => {
            let mut draft = AnnouncementDraft::new(title.as_str(), content.as_str(), *category);
            draft.is_featured = *featured;
            draft.media_url = media_url.clone();
            print_json(&core.content().create_announcement(&user, draft).await?)
        }
        AnnouncementCommand::Delete { id } => {
            let removed = core.content().delete_announcement(&user, id).await?;
            print_json(&json!({ "id": id, "removed": removed }))
        }
    }
}

/// Arguments of `sanctuary plan`.
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Service date; today by default
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Theme of the day
    #[arg(long)]
    pub theme: String,
    /// Preacher
    #[arg(long)]
    pub preacher: String,
    /// Liturgist
    #[arg(long, default_value = "")]
    pub liturgist: String,
    /// Scripture reading; repeat for several
    #[arg(long = "reading")]
    pub readings: Vec<String>,
    /// Hymn number; repeat for several
    #[arg(long = "hymn")]
    pub hymns: Vec<u32>,
    /// Planner notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// `sanctuary plan`
pub async fn handle_plan(core: &AppCore, args: &PlanArgs) -> Result<()> {
    let user = core.user().await;
    let draft = SundayServiceDraft {
        date: args.date,
        theme: args.theme.clone(),
        preacher: args.preacher.clone(),
        liturgist: args.liturgist.clone(),
        readings: args.readings.clone(),
        hymns: args.hymns.clone(),
        notes: args.notes.clone(),
    };
    print_json(&core.admin().save_service_plan(&user, draft).await?)
}

/// `sanctuary hymn [query]`
pub async fn handle_hymn(core: &AppCore, query: Option<&str>) -> Result<()> {
    let hymns = match query {
        Some(q) => core.content().search_hymns(q).await?,
        None => core.content().hymns().await?,
    };
    print_json(&hymns)
}

/// `sanctuary season`
pub async fn handle_season(core: &AppCore, date: Option<NaiveDate>) -> Result<()> {
    let date = match date {
        Some(date) => date,
        None => core.today().await,
    };
    let season = core.content().season_for(date).await?;
    print_json(&json!({ "date": date, "season": season }))
}

/// `sanctuary directory`
pub async fn handle_directory(core: &AppCore) -> Result<()> {
    let content = core.content();
    let (branches, organizations) =
        futures::try_join!(content.branches(), content.organizations())?;
    print_json(&json!({ "branches": branches, "organizations": organizations }))
}
