//! API origin configuration.
//!
//! The browser bundle has no process environment, so the base URL is fixed at
//! build time from `AUTH_API_BASE_URL` and handed to pages through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the auth API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`. Trailing slashes are dropped; a blank
    /// value falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at compile time via `AUTH_API_BASE_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AUTH_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/signup`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
