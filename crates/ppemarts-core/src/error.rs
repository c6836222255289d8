use thiserror::Error;

/// Top-level error type for the PPE Marts service.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for PpeError` where they need to cross a crate
/// boundary with `?`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PpeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PpeError {
    fn from(err: toml::de::Error) -> Self {
        PpeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PpeError {
    fn from(err: toml::ser::Error) -> Self {
        PpeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PpeError {
    fn from(err: serde_json::Error) -> Self {
        PpeError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for PPE Marts operations.
pub type Result<T> = std::result::Result<T, PpeError>;
