use probe_lib::ExecutorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "probe.toml";
pub const DEFAULT_STORE_FILE: &str = "probe-endpoints.json";
pub const DEFAULT_OWNER: &str = "local";

/// Contents of `probe.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub timeout_secs: Option<f64>,
    pub store: Option<PathBuf>,
    pub owner: Option<String>,
    pub user_agent: Option<String>,
}

/// Loads the config file from `path`, or from `probe.toml` in the current
/// directory when it exists.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, AppError> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return load_config_file(&default_path);
    }

    Ok(ConfigFile::default())
}

pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile = toml::from_str(&content).map_err(|source| AppError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn timeout_from_secs(secs: f64) -> Result<Duration, AppError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(AppError::Config(format!(
            "timeout must be a positive number of seconds, got {secs}"
        )));
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Effective settings after layering flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub executor: ExecutorConfig,
    pub store_path: PathBuf,
    pub owner: String,
}

impl Settings {
    /// `store`, `owner` and `timeout_secs` come from the command line (clap
    /// has already folded in the environment); `None` falls back to the file.
    pub fn resolve(
        file: &ConfigFile,
        store: Option<&Path>,
        owner: Option<&str>,
        timeout_secs: Option<f64>,
    ) -> Result<Self, AppError> {
        let timeout = timeout_secs
            .or(file.timeout_secs)
            .map(timeout_from_secs)
            .transpose()?;

        let owner = owner
            .or(file.owner.as_deref())
            .unwrap_or(DEFAULT_OWNER)
            .trim()
            .to_string();
        if owner.is_empty() {
            return Err(AppError::Config("owner must not be empty".to_string()));
        }

        Ok(Self {
            executor: ExecutorConfig {
                timeout,
                user_agent: file
                    .user_agent
                    .clone()
                    .unwrap_or_else(crate::core::version::user_agent),
            },
            store_path: store
                .map(Path::to_path_buf)
                .or_else(|| file.store.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
            owner,
        })
    }
}
