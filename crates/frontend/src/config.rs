//! Console configuration loading

use cloud_manager_frontend_common::{ConfigError, ConsoleConfig};

/// Configuration compiled into the bundle
pub const BUNDLED_CONFIG: &str = include_str!("../config/console.toml");

/// id of the optional `<script type="application/json">` override in the host page
pub const CONFIG_ELEMENT_ID: &str = "console-config";

pub fn bundled_config() -> Result<ConsoleConfig, ConfigError> {
    ConsoleConfig::from_toml_str(BUNDLED_CONFIG)
}

/// Load the configuration, preferring an override embedded in the host page
pub fn load_console_config() -> Result<ConsoleConfig, ConfigError> {
    match embedded_config_source() {
        Some(source) => {
            tracing::info!(element = CONFIG_ELEMENT_ID, "Using console configuration from host page");
            ConsoleConfig::from_json_str(&source)
        }
        None => bundled_config(),
    }
}

#[cfg(target_arch = "wasm32")]
fn embedded_config_source() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|source| !source.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_config_source() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_manager_frontend_common::components::StatusKind;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = bundled_config().unwrap();
        assert_eq!(config.identity.title, "Cloud Manager");
        assert_eq!(config.identity.href, "/");
        assert!(config.utilities.is_empty());
    }

    #[test]
    fn test_bundled_services() {
        let config = bundled_config().unwrap();
        let names: Vec<&str> = config.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["EC2", "S3", "Lambda", "CloudWatch"]);
        let ids: Vec<&str> = config.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ec2", "s3", "lambda", "cloudwatch"]);
    }

    #[test]
    fn test_bundled_navigation() {
        let config = bundled_config().unwrap();
        let sections: Vec<&str> = config.navigation.iter().map(|n| n.label()).collect();
        assert_eq!(
            sections,
            ["Cell", "Hardware", "Network", "Storage", "Compute", "Databases", "Monitoring"]
        );
        let links: usize = config.navigation.iter().map(|n| n.children().len()).sum();
        assert_eq!(links, 22);
    }

    #[test]
    fn test_bundled_dashboard_settings() {
        let config = bundled_config().unwrap();
        assert_eq!(config.dashboard.title, "Available Services");
        assert_eq!(config.dashboard.cards_per_row, 2);
        let status = config.dashboard.status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.label, "Error");
    }

    #[test]
    fn test_load_without_host_page_uses_bundle() {
        assert_eq!(load_console_config().unwrap(), bundled_config().unwrap());
    }
}
