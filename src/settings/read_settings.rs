use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{config_dirs, Settings, SettingsError};

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "FSTREE_CONFIG";

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(text)?)
}

/// Load settings.
///
/// Lookup order: `explicit`, then `$FSTREE_CONFIG`, then the per-user
/// default file. A file named explicitly (argument or environment) must be
/// readable; a missing default file just means built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return read_file(path);
    }
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return read_file(&PathBuf::from(path));
    }
    match config_dirs::default_settings_path() {
        Some(path) => match read_file(&path) {
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            other => other,
        },
        None => Ok(Settings::default()),
    }
}

fn read_file(path: &Path) -> Result<Settings, SettingsError> {
    debug!(path = %path.display(), "reading settings");
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&text)
}
