//! Error types shared by the console crates

/// Errors raised while loading or validating the console configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse console configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to parse embedded console configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid console configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create an invalid config error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Errors raised while installing the tracing subscriber
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

impl LoggingError {
    /// Create an invalid filter error
    pub fn invalid_filter(filter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            filter: filter.into(),
            message: message.into(),
        }
    }
}
