use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::{AppState, ListenBrainzUser, SimilarUser};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "ListenBrainz";
const APP_NAME: &str = "CompatibilityScore";

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "COMPAT_SCORE_CONFIG";

/// On-disk description of whose scores to show. Scores are taken as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub viewer: Option<ListenBrainzUser>,
    #[serde(default)]
    pub similar_users: Vec<SimilarUser>,
}

impl AppConfig {
    pub fn into_state(self) -> AppState {
        AppState {
            viewer: self.viewer,
            similar_users: self.similar_users,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// `Ok(None)` when no config file exists yet.
pub fn load_config() -> Result<Option<AppConfig>, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let config = parse_config(&data)?;
    tracing::debug!(
        path = %path.display(),
        users = config.similar_users.len(),
        "loaded config"
    );
    Ok(Some(config))
}

pub fn parse_config(data: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(data)?)
}
