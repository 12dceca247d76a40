//! Shared building blocks for the Cloud Manager console

pub mod components;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConsoleConfig, NavigationItem, ServiceCard};
pub use error::{ConfigError, LoggingError};
pub use logging::{InstrumentationConfig, init_tracing};
