mod config_error;
mod dashboard;
mod login;
mod not_found;

pub use config_error::{ConfigErrorPage, ConfigErrorPageProps};
pub use dashboard::{Dashboard, DashboardProps};
pub use login::LoginPage;
pub use not_found::NotFound;
