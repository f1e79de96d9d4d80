pub mod config_dirs;
pub mod read_settings;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs_op::{BindOptions, Mode};

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, project_config_dir};
pub use read_settings::{load_settings, parse_settings, CONFIG_ENV_VAR};

/// Defaults for operations whose caller did not say otherwise.
///
/// Every key is optional in the TOML file; missing keys keep the built-in
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Mode for copy, chmod and directory creation.
    pub mode: Mode,
    /// Whether chmod/chown/chgrp and directory creation recurse.
    pub recursive: bool,
    /// Whether directory handles create their path when binding.
    pub create: bool,
    /// Whether a move may replace an existing destination.
    pub overwrite: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: Mode::DEFAULT,
            recursive: true,
            create: true,
            overwrite: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn bind_options(&self) -> BindOptions {
        BindOptions {
            create: self.create,
            mode: self.mode,
        }
    }
}

/// Errors raised while locating or reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file `{}`: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}
