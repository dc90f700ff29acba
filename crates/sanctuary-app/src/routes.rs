//! # Route table and navigation
//!
//! Every screen is a [`Route`]. [`resolve`] turns a browser-style path into a
//! route, redirecting legacy and unknown paths; [`navigation`] lists the
//! links a role sees on each navigation surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use sanctuary_core::{FellowshipError, Role};

use crate::authorization::Capability;

/// Screen identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Home screen
    Dashboard,
    /// Role-specific portal
    Portal,
    /// Class register and attendance
    ClassManager,
    /// Bulk SMS
    BulkMessaging,
    /// Prayer request inbox
    PrayerRequests,
    /// Sunday service planner
    ServicePlanner,
    /// Announcements
    Announcements,
    /// Verse of the day
    Verse,
    /// Events calendar
    Events,
    /// Sunday service order
    Service,
    /// Daily devotion
    Devotion,
    /// Hymnal
    Hymnal,
    /// Liturgical calendar
    Liturgical,
    /// Sermons
    Sermons,
    /// Ministry forms
    Ministry,
    /// Profile and role switcher
    Profile,
    /// Branding settings
    Settings,
}

impl Route {
    /// Every route, in sidebar order.
    pub const ALL: [Route; 17] = [
        Self::Dashboard,
        Self::Announcements,
        Self::Verse,
        Self::Devotion,
        Self::Events,
        Self::Service,
        Self::Sermons,
        Self::Hymnal,
        Self::Liturgical,
        Self::Ministry,
        Self::Portal,
        Self::ClassManager,
        Self::PrayerRequests,
        Self::ServicePlanner,
        Self::BulkMessaging,
        Self::Profile,
        Self::Settings,
    ];

    /// Canonical path.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Portal => "/portal",
            Self::ClassManager => "/portal/class-manager",
            Self::BulkMessaging => "/portal/messaging",
            Self::PrayerRequests => "/portal/prayer-requests",
            Self::ServicePlanner => "/portal/service-planner",
            Self::Announcements => "/announcements",
            Self::Verse => "/verse",
            Self::Events => "/events",
            Self::Service => "/service",
            Self::Devotion => "/devotion",
            Self::Hymnal => "/hymnal",
            Self::Liturgical => "/liturgical",
            Self::Sermons => "/sermons",
            Self::Ministry => "/ministry",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
        }
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Home",
            Self::Portal => "Portal",
            Self::ClassManager => "Class Manager",
            Self::BulkMessaging => "Bulk Messaging",
            Self::PrayerRequests => "Prayer Requests",
            Self::ServicePlanner => "Service Planner",
            Self::Announcements => "Announcements",
            Self::Verse => "Verse of the Day",
            Self::Events => "Events",
            Self::Service => "Sunday Service",
            Self::Devotion => "Devotion",
            Self::Hymnal => "Hymnal",
            Self::Liturgical => "Liturgical Calendar",
            Self::Sermons => "Sermons",
            Self::Ministry => "Ministry",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Capability the route is gated on, if any.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::Portal => Some(Capability::ViewPortal),
            Self::ClassManager => Some(Capability::ManageClass),
            Self::BulkMessaging => Some(Capability::BulkMessaging),
            Self::PrayerRequests => Some(Capability::PastoralCare),
            Self::ServicePlanner => Some(Capability::PlanServices),
            Self::Ministry => Some(Capability::SubmitMinistryForms),
            _ => None,
        }
    }

    /// Whether `role` may open this route.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.capability().map_or(true, |c| c.allows(role))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The path names a route
    Matched {
        /// The route
        route: Route,
    },
    /// The path is legacy or unknown; go here instead
    Redirect {
        /// Normalized path that was requested
        from: String,
        /// Where to go
        to: Route,
    },
}

impl Resolution {
    /// The route to render.
    pub fn route(&self) -> Route {
        match self {
            Self::Matched { route } | Self::Redirect { to: route, .. } => *route,
        }
    }
}

/// Normalize a path: strip `#`, ensure a leading `/`, drop query string and
/// trailing slashes.
fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(&['?', '#'][..]).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolve a browser path (`/events`, `#/events`, `/events/`) to a route.
pub fn resolve(path: &str) -> Resolution {
    let normalized = normalize(path);
    if normalized == "/" {
        return Resolution::Matched {
            route: Route::Dashboard,
        };
    }
    if let Some(route) = Route::ALL.into_iter().find(|r| r.path() == normalized) {
        return Resolution::Matched { route };
    }
    let to = match normalized.as_str() {
        "/sick-reports" => Route::Ministry,
        _ => Route::Dashboard,
    };
    tracing::debug!(from = %normalized, to = %to, "route redirect");
    Resolution::Redirect {
        from: normalized,
        to,
    }
}

/// Where navigation links are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSurface {
    /// Desktop sidebar: everything the role may open
    Sidebar,
    /// Mobile bottom bar: the primary destinations
    BottomBar,
    /// Mobile overflow menu: everything not on the bottom bar
    MobileMenu,
}

impl NavSurface {
    /// Every surface.
    pub const ALL: [NavSurface; 3] = [Self::Sidebar, Self::BottomBar, Self::MobileMenu];
}

impl FromStr for NavSurface {
    type Err = FellowshipError;

    /// Accepts the wire names plus `bottom` and `menu`; dashes read as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sidebar" => Ok(Self::Sidebar),
            "bottom_bar" | "bottom" => Ok(Self::BottomBar),
            "mobile_menu" | "menu" => Ok(Self::MobileMenu),
            _ => Err(FellowshipError::invalid(format!(
                "unknown navigation surface: {s}"
            ))),
        }
    }
}

const BOTTOM_BAR: [Route; 5] = [
    Route::Dashboard,
    Route::Announcements,
    Route::Events,
    Route::Hymnal,
    Route::Portal,
];

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Target route
    pub route: Route,
    /// Label
    pub label: &'static str,
    /// Path to link to
    pub path: &'static str,
}

impl From<Route> for NavLink {
    fn from(route: Route) -> Self {
        Self {
            route,
            label: route.title(),
            path: route.path(),
        }
    }
}

/// Links shown to `role` on `surface`.
pub fn navigation(surface: NavSurface, role: Role) -> Vec<NavLink> {
    let routes: Vec<Route> = match surface {
        NavSurface::Sidebar => Route::ALL.to_vec(),
        NavSurface::BottomBar => BOTTOM_BAR.to_vec(),
        NavSurface::MobileMenu => Route::ALL
            .into_iter()
            .filter(|r| !BOTTOM_BAR.contains(r))
            .collect(),
    };
    routes
        .into_iter()
        .filter(|r| r.is_visible_to(role))
        .map(NavLink::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Resolution::Matched { route });
        }
    }

    #[test]
    fn test_hash_and_trailing_slash() {
        assert_eq!(resolve("#/events").route(), Route::Events);
        assert_eq!(resolve("/portal/messaging/").route(), Route::BulkMessaging);
        assert_eq!(resolve("hymnal?q=1").route(), Route::Hymnal);
        assert_eq!(resolve("/").route(), Route::Dashboard);
        assert_eq!(resolve("").route(), Route::Dashboard);
        assert_eq!(resolve("#/").route(), Route::Dashboard);
    }

    #[test]
    fn test_legacy_and_unknown_redirect() {
        assert_eq!(
            resolve("/sick-reports"),
            Resolution::Redirect {
                from: "/sick-reports".into(),
                to: Route::Ministry
            }
        );
        assert_eq!(
            resolve("/nowhere"),
            Resolution::Redirect {
                from: "/nowhere".into(),
                to: Route::Dashboard
            }
        );
    }

    #[test]
    fn test_member_navigation_hides_leadership_routes() {
        let sidebar = navigation(NavSurface::Sidebar, Role::Member);
        let routes: Vec<Route> = sidebar.iter().map(|l| l.route).collect();
        assert!(routes.contains(&Route::Portal));
        assert!(routes.contains(&Route::Ministry));
        assert!(!routes.contains(&Route::BulkMessaging));
        assert!(!routes.contains(&Route::ClassManager));
        assert!(!routes.contains(&Route::ServicePlanner));

        let admin = navigation(NavSurface::Sidebar, Role::Admin);
        assert_eq!(admin.len(), Route::ALL.len());
    }

    #[test]
    fn test_mobile_surfaces_partition_sidebar() {
        for role in Role::ALL {
            let sidebar = navigation(NavSurface::Sidebar, role).len();
            let bottom = navigation(NavSurface::BottomBar, role).len();
            let menu = navigation(NavSurface::MobileMenu, role).len();
            assert_eq!(bottom + menu, sidebar, "{role}");
            assert_eq!(bottom, 5);
        }
    }

    #[test]
    fn test_surface_names_parse() {
        assert_eq!("sidebar".parse::<NavSurface>().unwrap(), NavSurface::Sidebar);
        assert_eq!("Bottom-Bar".parse::<NavSurface>().unwrap(), NavSurface::BottomBar);
        assert_eq!("bottom".parse::<NavSurface>().unwrap(), NavSurface::BottomBar);
        assert_eq!("mobile_menu".parse::<NavSurface>().unwrap(), NavSurface::MobileMenu);
        assert_eq!("menu".parse::<NavSurface>().unwrap(), NavSurface::MobileMenu);

        let err = "footer".parse::<NavSurface>().unwrap_err();
        assert!(matches!(err, FellowshipError::Invalid { .. }));
    }
}
