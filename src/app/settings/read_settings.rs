use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::config_dirs::settings_path;
use super::write_settings::Settings;
use super::SettingsError;

/// Load settings from the platform config directory, falling back to
/// defaults when no file exists yet.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. A missing file yields defaults; a malformed
/// one is an error so the user's file is never silently ignored.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    let settings: Settings = toml::from_str(&text)?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}
