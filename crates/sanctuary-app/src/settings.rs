//! Device-local branding preferences
//!
//! Theme and church logo, each under its own storage key through
//! `StorageCoreEffects`. Read once at startup with [`SettingsStore::load`];
//! every setter writes through immediately.

use base64::Engine as _;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sanctuary_core::effects::StorageCoreEffects;
use sanctuary_core::{FellowshipError, Result};

/// Storage key holding the theme name.
pub const THEME_KEY: &str = "sanctuary-theme";

/// Storage key holding the logo data-URI.
pub const LOGO_KEY: &str = "sanctuary-logo";

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl ThemePreference {
    /// Every choice, as offered on the settings page.
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    /// Stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = FellowshipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(FellowshipError::invalid(format!("unknown theme: {other}"))),
        }
    }
}

/// Current branding preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Color scheme
    pub theme: ThemePreference,
    /// Church logo as a `data:image/...;base64,` URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Encode image bytes as a logo data-URI.
pub fn logo_data_uri(mime: &str, bytes: &[u8]) -> Result<String> {
    if !mime.starts_with("image/") {
        return Err(FellowshipError::invalid(format!("not an image type: {mime}")));
    }
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{mime};base64,{encoded}"))
}

fn validate_logo(uri: &str) -> Result<()> {
    let Some((header, payload)) = uri.split_once(',') else {
        return Err(FellowshipError::invalid("logo must be a data URI"));
    };
    if !header.starts_with("data:image/") || !header.ends_with(";base64") {
        return Err(FellowshipError::invalid(
            "logo must be a base64 data:image URI",
        ));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| FellowshipError::invalid(format!("logo payload: {e}")))?;
    Ok(())
}

/// Branding preferences backed by device-local storage.
pub struct SettingsStore {
    storage: Arc<dyn StorageCoreEffects>,
    preferences: RwLock<Preferences>,
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("preferences", &*self.preferences.read())
            .finish_non_exhaustive()
    }
}

impl SettingsStore {
    /// Read both keys from storage. Missing or unreadable values fall back
    /// to the defaults.
    pub async fn load(storage: Arc<dyn StorageCoreEffects>) -> Result<Self> {
        let theme = match storage.retrieve(THEME_KEY).await? {
            Some(bytes) => match std::str::from_utf8(&bytes)
                .ok()
                .and_then(|s| s.parse::<ThemePreference>().ok())
            {
                Some(theme) => theme,
                None => {
                    tracing::warn!(key = THEME_KEY, "unreadable theme preference, using default");
                    ThemePreference::default()
                }
            },
            None => ThemePreference::default(),
        };

        let logo = match storage.retrieve(LOGO_KEY).await? {
            Some(bytes) => match String::from_utf8(bytes) {
                Ok(uri) if validate_logo(&uri).is_ok() => Some(uri),
                _ => {
                    tracing::warn!(key = LOGO_KEY, "unreadable logo preference, ignoring");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            storage,
            preferences: RwLock::new(Preferences { theme, logo }),
        })
    }

    /// Current preferences.
    pub fn preferences(&self) -> Preferences {
        self.preferences.read().clone()
    }

    /// Persist a new theme.
    pub async fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        self.storage
            .store(THEME_KEY, theme.as_str().as_bytes().to_vec())
            .await?;
        self.preferences.write().theme = theme;
        tracing::info!(%theme, "theme updated");
        Ok(())
    }

    /// Persist a new logo, or remove it with `None`.
    pub async fn update_logo(&self, logo: Option<String>) -> Result<()> {
        match &logo {
            Some(uri) => {
                validate_logo(uri)?;
                self.storage
                    .store(LOGO_KEY, uri.as_bytes().to_vec())
                    .await?;
                tracing::info!(bytes = uri.len(), "logo updated");
            }
            None => {
                self.storage.remove(LOGO_KEY).await?;
                tracing::info!("logo removed");
            }
        }
        self.preferences.write().logo = logo;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctuary_testkit::TestStorage;

    const PIXEL: &[u8] = &[0x89, b'P', b'N', b'G'];

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let settings = SettingsStore::load(Arc::new(TestStorage::new()))
            .await
            .unwrap();
        assert_eq!(settings.preferences(), Preferences::default());
        assert_eq!(settings.preferences().theme, ThemePreference::System);
    }

    #[tokio::test]
    async fn test_writes_through_under_own_keys() {
        let storage = TestStorage::new();
        let settings = SettingsStore::load(Arc::new(storage.clone())).await.unwrap();

        settings.set_theme(ThemePreference::Dark).await.unwrap();
        let logo = logo_data_uri("image/png", PIXEL).unwrap();
        settings.update_logo(Some(logo.clone())).await.unwrap();

        assert_eq!(storage.get_string(THEME_KEY).await.as_deref(), Some("dark"));
        assert_eq!(storage.get_string(LOGO_KEY).await, Some(logo));

        settings.update_logo(None).await.unwrap();
        assert_eq!(storage.get_string(LOGO_KEY).await, None);
        assert!(settings.preferences().logo.is_none());
    }

    #[tokio::test]
    async fn test_garbage_theme_falls_back() {
        let storage = TestStorage::new();
        storage.store(THEME_KEY, b"sepia".to_vec()).await.unwrap();
        storage.store(LOGO_KEY, b"not a uri".to_vec()).await.unwrap();

        let settings = SettingsStore::load(Arc::new(storage)).await.unwrap();
        assert_eq!(settings.preferences(), Preferences::default());
    }

    #[tokio::test]
    async fn test_rejects_non_image_logo() {
        let settings = SettingsStore::load(Arc::new(TestStorage::new()))
            .await
            .unwrap();
        let err = settings
            .update_logo(Some("data:text/plain;base64,aGk=".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, FellowshipError::Invalid { .. }));
        assert!(logo_data_uri("text/plain", b"hi").is_err());
    }

    #[test]
    fn test_data_uri_shape() {
        let uri = logo_data_uri("image/png", PIXEL).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
        assert!(validate_logo(&uri).is_ok());
    }
}
