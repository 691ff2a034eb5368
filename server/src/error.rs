//! Request-path errors and their HTTP mapping.
//!
//! Every rejection is rendered as `{"detail": "..."}` so clients can read a
//! reason without caring which endpoint produced it. Internal causes are
//! logged here and never echoed to the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use wire::ErrorBody;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username already registered")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token encoding failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyUsername => StatusCode::BAD_REQUEST,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) | Self::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing reason.
    #[must_use]
    pub fn detail(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "Username must not be empty",
            Self::UsernameTaken => "Username already registered",
            Self::InvalidCredentials => "Invalid username or password",
            Self::InvalidToken => "Invalid token",
            Self::Store(_) | Self::Hash(_) | Self::Token(_) | Self::Join(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "auth request failed");
        }

        let mut response = (status, Json(ErrorBody::new(self.detail()))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
