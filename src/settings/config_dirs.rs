use std::path::PathBuf;

use directories_next::ProjectDirs;

const SETTINGS_FILE: &str = "fstree.toml";

/// Per-user configuration directory (for example `~/.config/fstree` on
/// Linux). `None` when no home directory can be determined.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Where settings are looked for when nothing else is specified.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}
