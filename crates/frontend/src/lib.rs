pub mod app;
pub mod config;
pub mod credentials;
pub mod pages;
pub mod routes;

pub use app::{App, AppProps, ServerApp, ServerAppProps, Shell};
pub use config::{bundled_config, load_console_config};
pub use routes::Route;
