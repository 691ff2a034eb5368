//! Credential submission against the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): [`UnavailableTransport`] reports a transport error,
//! since form submission is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`submit`] returns a typed `Result` instead of swallowing failures. Pages
//! decide what to do with the error; today they only log it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use wire::{Credentials, ErrorBody, MessageResponse};

use crate::util::config::ApiConfig;

/// Which auth endpoint a form posts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Signup,
    Login,
}

impl AuthAction {
    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Signup => "/signup",
            Self::Login => "/login",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Signup => "signup",
            Self::Login => "login",
        })
    }
}

/// Raw HTTP reply handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Why a submission did not yield a message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    #[error("request rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Capability to POST a JSON credentials body.
///
/// Injected into [`submit`] so the submission path can run without a network.
/// Futures are not required to be `Send`: the browser executor is single-threaded.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json(&self, url: &str, body: &Credentials) -> Result<HttpReply, TransportError>;
}

/// Browser transport backed by `gloo-net` (`fetch`).
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl AuthTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &Credentials) -> Result<HttpReply, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

/// Transport used outside the browser, where forms are never submitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

impl AuthTransport for UnavailableTransport {
    async fn post_json(&self, _url: &str, _body: &Credentials) -> Result<HttpReply, TransportError> {
        Err(TransportError("not available on server".to_owned()))
    }
}

/// Transport the pages use for the current build target.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = GlooTransport;

/// Transport the pages use for the current build target.
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = UnavailableTransport;

fn rejection_detail(status: u16, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return err.detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("HTTP {status}") } else { trimmed.to_owned() }
}

/// Submit `credentials` to the endpoint for `action`, exactly once.
///
/// # Errors
///
/// Returns [`SubmitError::Network`] when no reply arrives,
/// [`SubmitError::Rejected`] for non-2xx statuses and
/// [`SubmitError::Decode`] when a 2xx body has no string `message`.
pub async fn submit<T: AuthTransport>(
    transport: &T,
    config: &ApiConfig,
    action: AuthAction,
    credentials: &Credentials,
) -> Result<String, SubmitError> {
    let url = config.endpoint(action.path());
    let reply = transport.post_json(&url, credentials).await?;
    if !reply.is_success() {
        return Err(SubmitError::Rejected {
            status: reply.status,
            detail: rejection_detail(reply.status, &reply.body),
        });
    }
    let body: MessageResponse = serde_json::from_str(&reply.body).map_err(|e| SubmitError::Decode(e.to_string()))?;
    Ok(body.message)
}
