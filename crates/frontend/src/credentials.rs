//! Sign-in form state
//!
//! The form only checks that both fields are filled in. Nothing is sent
//! anywhere; an accepted form just points the page at the dashboard.

use crate::routes::Route;
use cloud_manager_frontend_common::components::FlashMessage;
use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

/// Flash id of the missing-credentials banner
pub const MISSING_CREDENTIALS_ID: &str = "error-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Please enter both username and password.")]
    Missing,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(CredentialsError::Missing);
        }
        Ok(())
    }
}

// Keep the password out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Editing,
    Accepted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub errors: Vec<FlashMessage>,
    pub status: LoginStatus,
}

pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    Submit,
}

impl LoginForm {
    /// Where the page should go next, if anywhere
    pub fn destination(&self) -> Option<Route> {
        match self.status {
            LoginStatus::Accepted => Some(Route::Dashboard),
            LoginStatus::Editing => None,
        }
    }
}

impl Reducible for LoginForm {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoginAction::SetUsername(username) => Rc::new(Self {
                credentials: Credentials {
                    username,
                    password: self.credentials.password.clone(),
                },
                ..(*self).clone()
            }),
            LoginAction::SetPassword(password) => Rc::new(Self {
                credentials: Credentials {
                    username: self.credentials.username.clone(),
                    password,
                },
                ..(*self).clone()
            }),
            LoginAction::Submit => match self.credentials.validate() {
                Ok(()) => {
                    tracing::debug!("Sign-in form accepted");
                    Rc::new(Self {
                        credentials: self.credentials.clone(),
                        errors: Vec::new(),
                        status: LoginStatus::Accepted,
                    })
                }
                Err(err) => {
                    tracing::info!(reason = %err, "Sign-in form rejected");
                    Rc::new(Self {
                        credentials: self.credentials.clone(),
                        errors: vec![FlashMessage::error(MISSING_CREDENTIALS_ID, err.to_string())],
                        status: LoginStatus::Editing,
                    })
                }
            },
        }
    }
}
