//! Shared request/response bodies for the auth HTTP API.
//!
//! This crate owns the JSON shapes used by `server`, `client` and `cli`, so
//! the three sides cannot drift apart. Every non-2xx response carries an
//! [`ErrorBody`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token type reported alongside every issued access token.
pub const BEARER: &str = "bearer";

/// Username/password pair posted to `/signup` and `/login`.
///
/// `Debug` redacts the password so drafts and request bodies can be logged.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Plain status message returned by `/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned by `/login`: a status message plus the issued token.
///
/// The SPA reads only `message`; the token is there for API consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
}

/// Body returned by the OAuth2-style `/token` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    #[must_use]
    pub fn bearer(access_token: String) -> Self {
        Self { access_token, token_type: BEARER.to_owned() }
    }
}

/// Identity resolved from a bearer token by `/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

/// Error payload for every rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
