//! Password auth service: registration, credential checks, bearer tokens.
//!
//! Passwords are hashed with bcrypt on a blocking thread; tokens are HS256
//! JWTs carrying the username as `sub`.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use wire::Credentials;

use crate::config::AuthSettings;
use crate::error::AuthError;
use crate::store::{StoreError, UserRecord, UserStore};

/// JWT claims issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Hash `password` with bcrypt at `cost`.
///
/// # Errors
///
/// Returns [`AuthError::Hash`] if bcrypt rejects the cost, or
/// [`AuthError::Join`] if the blocking task dies.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check `password` against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// Returns [`AuthError::Join`] if the blocking task dies.
pub async fn verify_password(password: String, hashed: String) -> Result<bool, AuthError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed).unwrap_or(false)).await?;
    Ok(matches)
}

/// Issue a signed access token for `username`.
///
/// # Errors
///
/// Returns [`AuthError::Token`] if encoding fails.
pub fn issue_token(username: &str, settings: &AuthSettings) -> Result<String, AuthError> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: username.to_owned(),
        iat: now,
        exp: now + settings.token_ttl_minutes * 60,
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

/// Validate a bearer token and return its claims.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] for bad signatures, expired tokens and
/// garbage input alike.
pub fn decode_token(token: &str, settings: &AuthSettings) -> Result<Claims, AuthError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        AuthError::InvalidToken
    })?;
    if data.claims.sub.is_empty() {
        return Err(AuthError::InvalidToken);
    }
    Ok(data.claims)
}

/// Register a new user. The username is stored trimmed, so `" alice"` and
/// `"alice"` are the same account.
///
/// # Errors
///
/// Returns [`AuthError::EmptyUsername`] for a blank username,
/// [`AuthError::UsernameTaken`] for a duplicate, or an internal error.
pub async fn register(store: &dyn UserStore, settings: &AuthSettings, creds: &Credentials) -> Result<(), AuthError> {
    let username = creds.username.trim();
    if username.is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    let hashed_password = hash_password(creds.password.clone(), settings.bcrypt_cost).await?;
    let record = UserRecord { username: username.to_owned(), hashed_password };
    match store.insert_user(record).await {
        Ok(()) => Ok(()),
        Err(StoreError::Duplicate(_)) => Err(AuthError::UsernameTaken),
        Err(e) => Err(e.into()),
    }
}

/// Check credentials against the store, trimming the username the same way
/// [`register`] does.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for an unknown user or a wrong
/// password, without saying which.
pub async fn authenticate(store: &dyn UserStore, creds: &Credentials) -> Result<UserRecord, AuthError> {
    let Some(user) = store.find_user(creds.username.trim()).await? else {
        return Err(AuthError::InvalidCredentials);
    };
    if verify_password(creds.password.clone(), user.hashed_password.clone()).await? {
        Ok(user)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Authenticate and issue a token in one step.
///
/// # Errors
///
/// See [`authenticate`] and [`issue_token`].
pub async fn login(store: &dyn UserStore, settings: &AuthSettings, creds: &Credentials) -> Result<String, AuthError> {
    let user = authenticate(store, creds).await?;
    issue_token(&user.username, settings)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
