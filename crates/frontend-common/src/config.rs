//! Console configuration
//!
//! Everything the console shows that is not user input lives here: the
//! identity in the top bar, the side navigation tree and the service
//! catalog on the dashboard. Views receive these values through properties
//! or context and never hardcode them.

use crate::components::StatusKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Largest supported card grid width
pub const MAX_CARDS_PER_ROW: u8 = 4;

/// Complete console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub identity: Identity,
    #[serde(default)]
    pub utilities: Vec<Utility>,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub services: Vec<ServiceCard>,
}

/// Product identity shown at the left of the top bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub title: String,
    #[serde(default = "default_identity_href")]
    pub href: String,
}

fn default_identity_href() -> String {
    "/".to_string()
}

/// Link shown at the right of the top bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utility {
    pub label: String,
    pub href: String,
}

/// Dashboard header and grid settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_dashboard_title")]
    pub title: String,
    #[serde(default = "default_cards_per_row")]
    pub cards_per_row: u8,
    #[serde(default)]
    pub status: Option<HeaderStatus>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_dashboard_title(),
            cards_per_row: default_cards_per_row(),
            status: None,
        }
    }
}

fn default_dashboard_title() -> String {
    "Available Services".to_string()
}

const fn default_cards_per_row() -> u8 {
    2
}

/// Status badge rendered next to the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStatus {
    pub kind: StatusKind,
    pub label: String,
}

/// Entry of the side navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationItem {
    Section {
        label: String,
        #[serde(default)]
        target: Option<String>,
        #[serde(default)]
        children: Vec<NavigationItem>,
    },
    Link {
        label: String,
        target: String,
    },
}

impl NavigationItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Section { label, .. } | Self::Link { label, .. } => label,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Section { target, .. } => target.as_deref(),
            Self::Link { target, .. } => Some(target),
        }
    }

    pub fn children(&self) -> &[NavigationItem] {
        match self {
            Self::Section { children, .. } => children,
            Self::Link { .. } => &[],
        }
    }
}

/// Static tile describing one offering on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ConsoleConfig {
    /// Parse and validate a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the views rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.title.trim().is_empty() {
            return Err(ConfigError::invalid("identity title must not be empty"));
        }
        if self.identity.href.trim().is_empty() {
            return Err(ConfigError::invalid("identity href must not be empty"));
        }

        for utility in &self.utilities {
            if utility.label.trim().is_empty() || utility.href.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "top navigation utilities need a label and an href",
                ));
            }
        }

        let per_row = self.dashboard.cards_per_row;
        if per_row == 0 || per_row > MAX_CARDS_PER_ROW {
            return Err(ConfigError::invalid(format!(
                "cards_per_row must be between 1 and {MAX_CARDS_PER_ROW}, got {per_row}"
            )));
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            if service.id.trim().is_empty() {
                return Err(ConfigError::invalid("service id must not be empty"));
            }
            if service.name.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "service '{}' has an empty name",
                    service.id
                )));
            }
            if !seen.insert(service.id.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate service id '{}'",
                    service.id
                )));
            }
        }

        self.navigation.iter().try_for_each(validate_navigation_item)
    }
}

fn validate_navigation_item(item: &NavigationItem) -> Result<(), ConfigError> {
    if item.label().trim().is_empty() {
        return Err(ConfigError::invalid("navigation label must not be empty"));
    }
    // Sections may omit a target, but a present one must be usable
    if let Some(target) = item.target() {
        if target.trim().is_empty() {
            return Err(ConfigError::invalid(format!(
                "navigation entry '{}' has an empty target",
                item.label()
            )));
        }
    }
    item.children().iter().try_for_each(validate_navigation_item)
}
