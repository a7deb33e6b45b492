use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::theme::PreviewTheme;

pub const DEFAULT_THEME: &str = "dark";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Preset name ("dark" or "light"), ignored when `custom_theme` is set
    pub theme: String,
    pub custom_theme: Option<PreviewTheme>,
    /// List mentioned user ids in the details pane
    pub show_mention_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            custom_theme: None,
            show_mention_ids: false,
        }
    }
}

impl Settings {
    pub fn resolve_theme(&self) -> Result<PreviewTheme, ConfigError> {
        if let Some(custom) = &self.custom_theme {
            // Reject unusable colors at load time rather than on every frame
            custom.text_color()?;
            return Ok(custom.clone());
        }
        Ok(PreviewTheme::named(&self.theme)?)
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj =
        ProjectDirs::from("org", "convo-preview", "convo-preview").ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(ConfigError::io(path, e)),
    };
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path).map_err(|e| ConfigError::io(path, e))?;
    file.write_all(data.as_bytes())
        .map_err(|e| ConfigError::io(path, e))?;
    Ok(())
}
