use crate::core::error::AppError;
use probe_lib::ProbeError;

/// Exit codes for the probe CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Configuration or input validation error
    ConfigError = 3,
    /// Endpoint store or config file could not be read or written
    FileError = 4,
    /// Saved endpoint or example not found
    NotFoundError = 5,
    /// The request never got a response
    NetworkError = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&AppError> for ExitCode {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Probe(ProbeError::Validation(_))
            | AppError::Probe(ProbeError::UnsupportedMethod(_)) => ExitCode::ConfigError,
            AppError::Probe(ProbeError::StoreIo { .. })
            | AppError::Probe(ProbeError::StoreFormat { .. }) => ExitCode::FileError,
            AppError::ReadConfig { .. } => ExitCode::FileError,
            AppError::ParseConfig { .. } | AppError::Config(_) => ExitCode::ConfigError,
            AppError::EndpointNotFound(_) | AppError::PresetNotFound(_) => {
                ExitCode::NotFoundError
            }
        }
    }
}
