//! Routing, navigation and page rendering.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use sanctuary_app::pages::{open, PageQuery};
use sanctuary_app::{navigation, resolve, AppCore, NavLink, NavSurface, Role, Route};
use sanctuary_core::types::AnnouncementCategory;

use super::print_json;

/// Arguments of `sanctuary page`.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Path to open, e.g. `/dashboard`
    #[arg(default_value = "/dashboard")]
    pub path: String,

    /// Announcement category filter
    #[arg(long)]
    pub category: Option<AnnouncementCategory>,

    /// Hymnal search text
    #[arg(long)]
    pub search: Option<String>,

    /// Date for devotion, verse and liturgical pages
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,

    /// Class for the class manager
    #[arg(long)]
    pub class: Option<String>,
}

impl From<&PageArgs> for PageQuery {
    fn from(args: &PageArgs) -> Self {
        Self {
            category: args.category,
            search: args.search.clone(),
            date: args.date,
            class_id: args.class.clone(),
        }
    }
}

#[derive(Serialize)]
struct RouteRow {
    path: &'static str,
    title: &'static str,
    restricted_to: Option<Vec<Role>>,
}

/// `sanctuary routes`
pub fn handle_routes() -> Result<()> {
    let rows: Vec<RouteRow> = Route::ALL
        .into_iter()
        .map(|route| RouteRow {
            path: route.path(),
            title: route.title(),
            restricted_to: route
                .capability()
                .map(|c| c.roles())
                .filter(|roles| roles.len() < Role::ALL.len()),
        })
        .collect();
    print_json(&rows)
}

/// `sanctuary resolve <path>`
pub fn handle_resolve(path: &str) -> Result<()> {
    print_json(&resolve(path))
}

/// `sanctuary nav`
pub fn handle_nav(role: Role, surface: Option<NavSurface>) -> Result<()> {
    let surfaces = match surface {
        Some(surface) => vec![surface],
        None => NavSurface::ALL.to_vec(),
    };
    let links: Vec<(NavSurface, Vec<NavLink>)> = surfaces
        .into_iter()
        .map(|s| (s, navigation(s, role)))
        .collect();
    print_json(&links)
}

/// `sanctuary page <path>`
pub async fn handle_page(core: &AppCore, args: &PageArgs) -> Result<()> {
    let page = open(core, &args.path, &PageQuery::from(args)).await?;
    print_json(&page)
}
