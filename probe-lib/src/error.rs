use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error("Failed to access endpoint store '{path}': {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Endpoint store '{path}' is not valid JSON: {source}")]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ProbeError {
    pub fn validation(message: impl Into<String>) -> Self {
        ProbeError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProbeError::Validation(_) | ProbeError::UnsupportedMethod(_)
        )
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
