//! Sanctuary App - Portable Headless Application Core
//!
//! Everything a Sanctuary frontend needs, with no rendering:
//!
//! - [`AppCore`]: one signed-in session over a gateway, a clock and
//!   device-local storage
//! - `services`: content, pastoral submissions, class registers and bulk SMS
//! - `authorization`: the role/capability table and page gating
//! - `pages`: serializable view models, one per [`Route`]
//! - `routes`: path resolution and per-surface navigation
//! - `settings`: theme and logo preferences persisted through storage effects
//!
//! # Example
//!
//! ```ignore
//! use sanctuary_app::{pages, AppConfig, AppCore};
//!
//! let core = AppCore::start(AppConfig::default(), storage, clock).await?;
//! let page = pages::open(&core, "#/events", &Default::default()).await?;
//! println!("{}", serde_json::to_string_pretty(&page)?);
//! ```

pub mod authorization;
pub mod config;
pub mod core;
pub mod errors;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;
pub mod settings;

pub use authorization::{Access, Capability};
pub use config::AppConfig;
pub use self::core::AppCore;
pub use errors::{Alert, AlertLevel, ErrorCategory};
pub use pages::{load_page, open, Page, PageQuery};
pub use routes::{navigation, resolve, NavLink, NavSurface, Resolution, Route};
pub use session::Session;
pub use settings::{logo_data_uri, Preferences, SettingsStore, ThemePreference};

pub use sanctuary_core::{FellowshipError, Result, Role};
