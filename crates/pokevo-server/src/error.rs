//! Error types for the server binary.

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("config error: {0}")]
    Invalid(String),
}
