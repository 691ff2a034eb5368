//! Server configuration parsed from environment variables.
//!
//! Variables (all optional unless noted):
//! - `PORT`: listen port, default 8000
//! - `JWT_SECRET`: HS256 signing secret; required unless `AUTH_DEV_MODE` is truthy
//! - `AUTH_DEV_MODE`: allow the built-in development secret
//! - `ACCESS_TOKEN_EXPIRE_MINUTES`: token lifetime, default 30
//! - `BCRYPT_COST`: bcrypt work factor, default `bcrypt::DEFAULT_COST`
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origins. Defaults to the dev
//!   frontend `http://localhost:3000` plus `localhost` and `127.0.0.1` on `PORT`,
//!   where this server hosts the SPA itself
//! - `DATABASE_URL`: Postgres URL; absent means an in-memory user store
//! - `DB_MAX_CONNECTIONS`: pool size, default 5

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
pub const DEV_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub(crate) const DEV_JWT_SECRET: &str = "dev-only-insecure-jwt-secret";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required (set AUTH_DEV_MODE=1 to use a development secret)")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Signing and hashing parameters used by the auth service.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthSettings,
    pub allowed_origins: Vec<String>,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value does not parse or the JWT
    /// secret is missing outside dev mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let token_ttl_minutes = parse_or(&lookup, "ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if token_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                var: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: token_ttl_minutes.to_string(),
            });
        }
        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid { var: "BCRYPT_COST", value: bcrypt_cost.to_string() });
        }
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        let dev_mode = lookup("AUTH_DEV_MODE").as_deref().and_then(parse_bool).unwrap_or(false);
        let jwt_secret = match non_blank(lookup("JWT_SECRET")) {
            Some(secret) => secret,
            None if dev_mode => DEV_JWT_SECRET.to_owned(),
            None => return Err(ConfigError::Missing("JWT_SECRET")),
        };

        let allowed_origins = match non_blank(lookup("CORS_ALLOWED_ORIGINS")) {
            Some(raw) => parse_origins(&raw)?,
            None => default_origins(port),
        };

        Ok(Self {
            port,
            auth: AuthSettings { jwt_secret, token_ttl_minutes, bcrypt_cost },
            allowed_origins,
            database_url: non_blank(lookup("DATABASE_URL")),
            db_max_connections,
        })
    }

    /// Whether the signing secret is the built-in development one.
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool {
        self.auth.jwt_secret == DEV_JWT_SECRET
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_blank(lookup(var)) {
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}

/// The dev frontend plus the origins the SPA is served from on `port`.
/// The page and the API share a port but not always a host name, so both
/// loopback spellings are listed.
fn default_origins(port: u16) -> Vec<String> {
    vec![
        DEV_FRONTEND_ORIGIN.to_owned(),
        format!("http://localhost:{port}"),
        format!("http://127.0.0.1:{port}"),
    ]
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_owned())
        .filter(|o| !o.is_empty())
        .collect();
    for origin in &origins {
        // A wildcard cannot be combined with credentialed CORS.
        if origin == "*" || HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::Invalid { var: "CORS_ALLOWED_ORIGINS", value: origin.clone() });
        }
    }
    Ok(origins)
}
