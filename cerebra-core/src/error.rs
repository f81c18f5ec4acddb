//! Error types for the Cerebra core library.

use thiserror::Error;

use crate::config::ConfigLoadError;

/// The main error type for the Cerebra core library.
#[derive(Debug, Error)]
pub enum CerebraError {
    /// Reconfiguration payload is missing one or more required fields.
    ///
    /// The display text is a stable external contract; which key was
    /// missing is deliberately not reported.
    #[error("Invalid config")]
    InvalidConfig,

    /// Settings could not be loaded from files or the environment.
    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CerebraError {
    fn from(err: serde_json::Error) -> Self {
        CerebraError::Serialization(err.to_string())
    }
}

impl CerebraError {
    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CerebraError::InvalidConfig | CerebraError::ConfigLoad(_)
        )
    }
}

/// Result type alias for Cerebra operations.
pub type CerebraResult<T> = Result<T, CerebraError>;
