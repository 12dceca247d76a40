//! Server-side rendering of the console pages

#![cfg(not(target_arch = "wasm32"))]

use cloud_manager_frontend::pages::{
    ConfigErrorPage, ConfigErrorPageProps, Dashboard, DashboardProps,
};
use cloud_manager_frontend::{ServerApp, ServerAppProps, bundled_config};
use cloud_manager_frontend_common::ConsoleConfig;
use cloud_manager_frontend_common::config::{
    DashboardSettings, NavigationItem, ServiceCard, Utility,
};
use std::rc::Rc;
use yew::{AttrValue, ServerRenderer};

async fn render_path(path: &'static str) -> String {
    render_with_config(path, || bundled_config().unwrap()).await
}

async fn render_with_config<F>(path: &'static str, config: F) -> String
where
    F: FnOnce() -> ConsoleConfig + Send + 'static,
{
    ServerRenderer::<ServerApp>::with_props(move || ServerAppProps {
        path: AttrValue::from(path),
        config: Rc::new(config()),
    })
    .hydratable(false)
    .render()
    .await
}

fn service(id: &str, name: &str) -> ServiceCard {
    ServiceCard {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
    }
}

#[tokio::test]
async fn test_root_renders_login_form() {
    let html = render_path("/").await;

    assert!(html.contains(r#"data-component="login-form""#));
    assert!(html.contains("Sign in"));
    assert!(html.contains(r#"id="username""#));
    assert!(html.contains(r#"id="password""#));
    assert!(html.contains(r#"type="password""#));
    assert!(html.contains("Enter your username"));
    assert!(html.contains("Enter your password"));
    // No banner before the first submit
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("data-card-id"));
}

#[tokio::test]
async fn test_top_bar_is_rendered_on_every_route() {
    for path in ["/", "/dashboard", "/missing"] {
        let html = render_path(path).await;
        assert!(html.contains(r#"data-component="top-navigation""#), "{path}");
        assert!(html.contains("Cloud Manager"), "{path}");
    }
}

#[tokio::test]
async fn test_dashboard_renders_without_signing_in() {
    let html = render_path("/dashboard").await;

    assert!(!html.contains(r#"data-component="login-form""#));
    assert!(html.contains("Available Services"));
    assert!(html.contains(r#"data-status="error""#));
    assert!(html.contains(r#"data-component="side-navigation""#));
}

#[tokio::test]
async fn test_dashboard_renders_four_default_services_in_order() {
    let html = render_path("/dashboard").await;

    assert_eq!(html.matches("data-card-id=").count(), 4);
    let positions: Vec<usize> = ["EC2", "S3", "Lambda", "CloudWatch"]
        .iter()
        .map(|name| html.find(&format!(">{name}<")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_dashboard_renders_navigation_tree() {
    let html = render_path("/dashboard").await;

    assert_eq!(html.matches(r#"data-nav-kind="section""#).count(), 7);
    assert_eq!(html.matches(r#"data-nav-kind="link""#).count(), 22);
    assert!(html.contains("Route Tables"));
    assert!(html.contains(r##"href="#/authentication""##));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let html = render_path("/settings").await;

    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to sign in"));
    assert!(!html.contains(r#"data-component="login-form""#));
}

#[tokio::test]
async fn test_utilities_come_from_config() {
    let html = render_with_config("/", || {
        let mut config = bundled_config().unwrap();
        config.utilities.push(Utility {
            label: "Docs".to_string(),
            href: "https://docs.example.com".to_string(),
        });
        config
    })
    .await;

    assert!(html.contains(r#"href="https://docs.example.com""#));
    assert!(html.contains("Docs"));
}

#[tokio::test]
async fn test_dashboard_view_renders_injected_services() {
    let html = ServerRenderer::<Dashboard>::with_props(|| DashboardProps {
        navigation: vec![NavigationItem::Link {
            label: "Overview".to_string(),
            target: "#/overview".to_string(),
        }],
        services: vec![service("db", "Databases"), service("queue", "Queues")],
        settings: DashboardSettings::default(),
    })
    .hydratable(false)
    .render()
    .await;

    assert_eq!(html.matches("data-card-id=").count(), 2);
    assert!(html.contains(r#"data-card-id="db""#));
    assert!(html.contains(r#"data-card-id="queue""#));
    assert!(html.contains("Queues description"));
    assert_eq!(html.matches(r#"data-nav-kind="link""#).count(), 1);
    // No status configured
    assert!(!html.contains("data-status"));
    assert!(!html.contains("EC2"));
}

#[tokio::test]
async fn test_dashboard_view_without_services() {
    let html = ServerRenderer::<Dashboard>::with_props(|| DashboardProps {
        navigation: Vec::new(),
        services: Vec::new(),
        settings: DashboardSettings {
            title: "Nothing here".to_string(),
            ..DashboardSettings::default()
        },
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains("Nothing here"));
    assert!(html.contains("No services available"));
    assert!(!html.contains("data-card-id"));
}

#[tokio::test]
async fn test_config_error_page_shows_message() {
    let html = ServerRenderer::<ConfigErrorPage>::with_props(|| ConfigErrorPageProps {
        message: AttrValue::from("Invalid console configuration: duplicate service id 'ec2'"),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("The console could not start"));
    assert!(html.contains("duplicate service id"));
}
