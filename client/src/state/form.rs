//! Draft credentials and status message for one auth form.
//!
//! DESIGN
//! ======
//! The page wraps this in an `RwSignal`; all transitions are plain methods so
//! they can be exercised without a reactive runtime. Nothing here is
//! persisted: the draft dies with the page.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use wire::Credentials;

use crate::net::api::{AuthAction, SubmitError};

/// Local state of a signup or login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    action: AuthAction,
    username: String,
    password: String,
    message: String,
}

impl FormState {
    #[must_use]
    pub fn new(action: AuthAction) -> Self {
        Self { action, username: String::new(), password: String::new(), message: String::new() }
    }

    #[must_use]
    pub fn action(&self) -> AuthAction {
        self.action
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Status text shown under the form.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Snapshot of the draft, as sent on submit. No validation is applied.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Fold a finished submission into the form.
    ///
    /// A message replaces the status text. A failure is logged and the status
    /// text is left as it was; the user is not told.
    pub fn apply(&mut self, result: &Result<String, SubmitError>) {
        match result {
            Ok(message) => self.message.clone_from(message),
            Err(e) => log::error!("{} request failed: {e}", self.action),
        }
    }
}
