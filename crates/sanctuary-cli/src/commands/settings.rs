//! Theme and logo preferences.

use anyhow::{anyhow, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use sanctuary_app::{logo_data_uri, AppCore, ThemePreference};

use super::print_json;

/// `sanctuary settings ...`
#[derive(Debug, Clone, Subcommand)]
pub enum SettingsCommand {
    /// Current preferences
    Show,

    /// Set the color scheme (light, dark, system)
    Theme {
        /// Theme
        theme: ThemePreference,
    },

    /// Replace the church logo with an image file
    Logo {
        /// PNG, JPEG, GIF, SVG or WebP file
        #[arg(required_unless_present = "clear")]
        file: Option<PathBuf>,
        /// Remove the logo instead
        #[arg(long)]
        clear: bool,
    },
}

/// MIME type for an image file, from its extension.
fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    Some(match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => return None,
    })
}

/// Dispatch a settings command.
pub async fn handle_settings_command(core: &AppCore, cmd: &SettingsCommand) -> Result<()> {
    let settings = core.settings();
    match cmd {
        SettingsCommand::Show => {}
        SettingsCommand::Theme { theme } => settings.set_theme(*theme).await?,
        SettingsCommand::Logo { clear: true, .. } => settings.update_logo(None).await?,
        SettingsCommand::Logo { file, .. } => {
            let path = file
                .as_deref()
                .ok_or_else(|| anyhow!("a logo file is required"))?;
            let mime = image_mime(path)
                .ok_or_else(|| anyhow!("unsupported image type: {}", path.display()))?;
            let bytes = tokio::fs::read(path).await?;
            tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "read logo");
            settings.update_logo(Some(logo_data_uri(mime, &bytes)?)).await?;
        }
    }
    print_json(&settings.preferences())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("logo.PNG")), Some("image/png"));
        assert_eq!(image_mime(Path::new("a/b.jpeg")), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("logo.svg")), Some("image/svg+xml"));
        assert_eq!(image_mime(Path::new("logo.txt")), None);
        assert_eq!(image_mime(Path::new("logo")), None);
    }
}
