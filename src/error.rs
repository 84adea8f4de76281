use thiserror::Error;

use crate::registry::RegistryError;

/// Result type for oopgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the fallible outer surface of oopgen.
///
/// Expected editing states (bad names, unmet interface obligations, half-filled
/// members) are data, not errors; see [`crate::review`] and
/// [`crate::registry::naming`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
