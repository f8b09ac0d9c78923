use crate::config::ConfigError;
use std::path::{Path, PathBuf};

pub const GLOBAL_STATE_DIR: &str = ".autochain";
pub const GLOBAL_SETTINGS_FILE_NAME: &str = "config.json";
pub const PROJECT_SETTINGS_FILE_NAME: &str = ".autochain.json";
pub const STATE_ROOT_ENV: &str = "AUTOCHAIN_STATE_ROOT";

/// State root for the handoff slot, pickup file and debug log. The env
/// override exists so hooks and tests can point the controller at a private
/// directory without touching `$HOME`.
pub fn default_state_root() -> Result<PathBuf, ConfigError> {
    if let Some(root) = std::env::var_os(STATE_ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(GLOBAL_STATE_DIR))
}

pub fn default_global_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_state_root()?.join(GLOBAL_SETTINGS_FILE_NAME))
}

pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_SETTINGS_FILE_NAME)
}
