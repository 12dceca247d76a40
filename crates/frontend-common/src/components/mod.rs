mod cards;
mod flashbar;
mod form_field;
mod layout;
mod side_navigation;
mod status_indicator;
mod top_navigation;

pub use cards::{Cards, grid_class};
pub use flashbar::{FlashMessage, Flashbar, Severity};
pub use form_field::{FormField, TextInput};
pub use layout::{AppLayout, Header};
pub use side_navigation::SideNavigation;
pub use status_indicator::{StatusIndicator, StatusKind};
pub use top_navigation::TopNavigation;
