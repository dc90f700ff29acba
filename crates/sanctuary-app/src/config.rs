//! Application configuration
//!
//! Read from a TOML file by the host; every field has a default so a missing
//! file or a partial file both work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use sanctuary_core::{FellowshipError, Result, Role};

/// Directory name used under the platform data dir.
const APP_DIR_NAME: &str = "sanctuary";

/// Fallback data dir when the platform has none.
const FALLBACK_DATA_DIR: &str = ".sanctuary";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Church name shown in greetings and the header
    pub church_name: String,
    /// Where device-local preferences live; platform data dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Role the demo user starts in
    pub default_role: Role,
    /// How many upcoming events the dashboard shows
    pub upcoming_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            church_name: "Sanctuary Methodist Church".to_string(),
            data_dir: None,
            default_role: Role::Member,
            upcoming_events: 3,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| FellowshipError::invalid(format!("config: {e}")))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FellowshipError::serialization(e.to_string()))
    }

    /// Effective preferences directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
        })
    }
}
