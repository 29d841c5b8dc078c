use crate::error::{PrivacyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".github_privacy_config.json";

/// Contents of the per-user credentials file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ConfigFile {
    pub fn is_complete(&self) -> bool {
        has_value(&self.token) && has_value(&self.username)
    }
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// `$HOME/.github_privacy_config.json`, or `None` when `HOME` is unset.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

/// A missing file is an empty config. So is an unreadable or malformed one,
/// with a warning.
pub fn load_config(path: &Path) -> ConfigFile {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return ConfigFile::default();
    }

    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file {}: {}", path.display(), e);
            ConfigFile::default()
        }
    }
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &ConfigFile) -> Result<()> {
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents).map_err(|e| {
        PrivacyError::ConfigError(format!("could not write {}: {}", path.display(), e))
    })?;
    restrict_permissions(path)?;
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    // The file holds a token.
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
