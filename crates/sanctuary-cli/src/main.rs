//! Command-line frontend for Sanctuary
//!
//! Every invocation is one session: entity changes made by a command last
//! until the process exits, while theme and logo preferences persist in the
//! data directory. Output is JSON on stdout; logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sanctuary_app::{AppConfig, AppCore, NavSurface, Role};
use sanctuary_effects::{FilesystemStorageHandler, RealTimeHandler};

mod commands;

use commands::{
    content::{
        handle_announcement_command, handle_directory, handle_hymn, handle_plan, handle_season,
        AnnouncementCommand, PlanArgs,
    },
    navigation::{handle_nav, handle_page, handle_resolve, handle_routes, PageArgs},
    pastoral::{
        handle_message_command, handle_prayer_command, handle_sick_command, MessageCommand,
        PrayerCommand, SickCommand,
    },
    settings::{handle_settings_command, SettingsCommand},
};

#[derive(Parser)]
#[command(name = "sanctuary")]
#[command(about = "Sanctuary - church community app", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "sanctuary.toml")]
    config: PathBuf,

    /// Act as this role instead of the configured default
    #[arg(long, global = true)]
    role: Option<Role>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route with its gate
    Routes,

    /// Resolve a path the way the router does
    Resolve {
        /// Path, e.g. `#/events` or `/sick-reports`
        path: String,
    },

    /// Navigation links for the current role
    Nav {
        /// Only this surface (sidebar, bottom_bar, mobile_menu)
        #[arg(long)]
        surface: Option<NavSurface>,
    },

    /// Render a page view model
    Page(PageArgs),

    /// Announcements
    #[command(subcommand)]
    Announcements(AnnouncementCommand),

    /// Prayer requests
    #[command(subcommand)]
    Prayer(PrayerCommand),

    /// Sick reports
    #[command(subcommand)]
    Sick(SickCommand),

    /// Messages: bulk SMS and notes to the minister
    #[command(subcommand)]
    Message(MessageCommand),

    /// Save a Sunday service plan (stewards, ministers, admins)
    Plan(PlanArgs),

    /// Search the hymnal
    Hymn {
        /// Hymn number or words
        query: Option<String>,
    },

    /// Liturgical season for a date (today by default)
    Season {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Branches of the circuit and church organizations
    Directory,

    /// Theme and logo preferences
    #[command(subcommand)]
    Settings(SettingsCommand),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn start_core(cli: &Cli) -> Result<AppCore> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(role) = cli.role {
        config.default_role = role;
    }
    let storage = Arc::new(FilesystemStorageHandler::new(config.resolved_data_dir()));
    let core = AppCore::start(config, storage, Arc::new(RealTimeHandler::new())).await?;
    Ok(core)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Routes => handle_routes()?,
        Commands::Resolve { path } => handle_resolve(path)?,
        Commands::Nav { surface } => {
            let role = match cli.role {
                Some(role) => role,
                None => AppConfig::load(&cli.config)?.default_role,
            };
            handle_nav(role, *surface)?;
        }
        Commands::Page(args) => handle_page(&start_core(&cli).await?, args).await?,
        Commands::Announcements(cmd) => {
            handle_announcement_command(&start_core(&cli).await?, cmd).await?;
        }
        Commands::Prayer(cmd) => handle_prayer_command(&start_core(&cli).await?, cmd).await?,
        Commands::Sick(cmd) => handle_sick_command(&start_core(&cli).await?, cmd).await?,
        Commands::Message(cmd) => handle_message_command(&start_core(&cli).await?, cmd).await?,
        Commands::Plan(args) => handle_plan(&start_core(&cli).await?, args).await?,
        Commands::Hymn { query } => handle_hymn(&start_core(&cli).await?, query.as_deref()).await?,
        Commands::Season { date } => handle_season(&start_core(&cli).await?, *date).await?,
        Commands::Directory => handle_directory(&start_core(&cli).await?).await?,
        Commands::Settings(cmd) => handle_settings_command(&start_core(&cli).await?, cmd).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_surface_is_typed() {
        let cli = Cli::try_parse_from(["sanctuary", "nav", "--surface", "bottom-bar"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Nav {
                surface: Some(NavSurface::BottomBar)
            }
        ));

        assert!(Cli::try_parse_from(["sanctuary", "nav", "--surface", "footer"]).is_err());
    }

    #[test]
    fn test_directory_command_parses() {
        let cli = Cli::try_parse_from(["sanctuary", "--role", "admin", "directory"]).unwrap();
        assert!(matches!(cli.command, Commands::Directory));
        assert_eq!(cli.role, Some(Role::Admin));
    }
}
