use probe_lib::ProbeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config '{path}': {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),
    #[error("Example not found: {0}")]
    PresetNotFound(String),
}
