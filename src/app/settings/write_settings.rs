use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config_dirs::{ensure_dirs_exist, settings_path};
use super::SettingsError;
use crate::app::core::carousel::GestureConfig;
use crate::app::core::visuals::VisualRanges;

/// User-tunable settings persisted as TOML.
///
/// Every field has a default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mouse_enabled: bool,
    /// `dark` or `light`.
    pub theme: String,
    /// Poll/tick interval of the event loop.
    pub frame_ms: u64,
    pub gesture: GestureConfig,
    pub visuals: VisualRanges,
    /// Overrides for the default keybinds: action name to key names.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mouse_enabled: true,
            theme: "dark".to_string(),
            frame_ms: 16,
            gesture: GestureConfig::default(),
            visuals: VisualRanges::default(),
            keybinds: BTreeMap::new(),
        }
    }
}

/// Persist settings to the platform config directory.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    ensure_dirs_exist()?;
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(settings, &path)
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}
