//! Browser logging setup
//!
//! Events go through `tracing`. In the browser the fmt layer writes to the
//! devtools console and the performance layer records spans as
//! `performance.mark` entries.

use crate::error::LoggingError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Name reported in the startup event
    pub service_name: String,
    /// Log level filter (e.g., "info", "debug", "cloud_manager_frontend=trace")
    pub log_level: String,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "cloud-manager".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl InstrumentationConfig {
    /// Verbose configuration for debug builds
    pub fn dev() -> Self {
        Self {
            service_name: "cloud-manager-dev".to_string(),
            log_level: "debug".to_string(),
        }
    }

    /// Pick `dev()` for debug builds and the default otherwise
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::dev()
        } else {
            Self::default()
        }
    }

    /// Build the level filter described by `log_level`
    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| LoggingError::invalid_filter(&self.log_level, e.to_string()))
    }
}

/// Install the global subscriber writing to the browser console
pub fn init_tracing(config: &InstrumentationConfig) -> Result<(), LoggingError> {
    use tracing_subscriber::fmt::format::Pretty;
    use tracing_web::{MakeWebConsoleWriter, performance_layer};

    let filter = config.filter()?;

    // The browser has no std::time clock
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .with(filter)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::info!(service = %config.service_name, level = %config.log_level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstrumentationConfig::default();
        assert_eq!(config.service_name, "cloud-manager");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_dev_config() {
        let config = InstrumentationConfig::dev();
        assert_eq!(config.service_name, "cloud-manager-dev");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_for_build_matches_profile() {
        let config = InstrumentationConfig::for_build();
        let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
        assert_eq!(config.log_level, expected);
    }

    #[test]
    fn test_filter_accepts_directives() {
        let config = InstrumentationConfig {
            log_level: "warn,cloud_manager_frontend=debug".to_string(),
            ..InstrumentationConfig::default()
        };
        assert!(config.filter().is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let config = InstrumentationConfig {
            log_level: "cloud_manager=notalevel".to_string(),
            ..InstrumentationConfig::default()
        };
        let err = config.filter().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }
}
