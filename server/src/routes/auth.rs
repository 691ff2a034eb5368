//! Auth routes: signup, login, OAuth2-style token issue, current user.

use axum::extract::{Form, FromRef, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Json;
use wire::{BEARER, Credentials, CurrentUser, LoginResponse, MessageResponse, TokenResponse};

use crate::error::AuthError;
use crate::services::auth as auth_svc;
use crate::state::AppState;

pub(crate) const SIGNUP_MESSAGE: &str = "User signed up successfully";
pub(crate) const LOGIN_MESSAGE: &str = "Login successful";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Caller identified by an `Authorization: Bearer <jwt>` header.
/// Use as a handler parameter to require a valid token.
pub struct BearerUser {
    pub username: String,
}

/// Pull the token out of an `Authorization` header value.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl<S> axum::extract::FromRequestParts<S> for BearerUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::InvalidToken)?;

        let app_state = AppState::from_ref(state);
        let claims = auth_svc::decode_token(token, &app_state.auth)?;
        Ok(Self { username: claims.sub })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /signup`: register a user from a JSON body.
pub async fn signup(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<MessageResponse>, AuthError> {
    match auth_svc::register(state.store.as_ref(), &state.auth, &creds).await {
        Ok(()) => {
            tracing::info!(username = %creds.username, "user signed up");
            Ok(Json(MessageResponse { message: SIGNUP_MESSAGE.to_owned() }))
        }
        Err(e) => {
            tracing::warn!(username = %creds.username, error = %e, "signup rejected");
            Err(e)
        }
    }
}

/// `POST /login`: JSON counterpart of `/signup`; returns a message and a token.
pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<LoginResponse>, AuthError> {
    let access_token = issue_for(&state, &creds).await?;
    Ok(Json(LoginResponse {
        message: LOGIN_MESSAGE.to_owned(),
        access_token,
        token_type: BEARER.to_owned(),
    }))
}

/// `POST /token`: OAuth2 password grant with a form-encoded body.
pub async fn token_form(
    State(state): State<AppState>,
    Form(creds): Form<Credentials>,
) -> Result<Json<TokenResponse>, AuthError> {
    let access_token = issue_for(&state, &creds).await?;
    Ok(Json(TokenResponse::bearer(access_token)))
}

/// `GET /token?username=..&password=..`: query-string variant of `/token`.
pub async fn token_query(
    State(state): State<AppState>,
    Query(creds): Query<Credentials>,
) -> Result<Json<TokenResponse>, AuthError> {
    let access_token = issue_for(&state, &creds).await?;
    Ok(Json(TokenResponse::bearer(access_token)))
}

/// `GET /users/me`: identity behind the bearer token.
pub async fn me(user: BearerUser) -> Json<CurrentUser> {
    Json(CurrentUser { username: user.username })
}

async fn issue_for(state: &AppState, creds: &Credentials) -> Result<String, AuthError> {
    match auth_svc::login(state.store.as_ref(), &state.auth, creds).await {
        Ok(token) => {
            tracing::info!(username = %creds.username, "login succeeded");
            Ok(token)
        }
        Err(e) => {
            tracing::warn!(username = %creds.username, error = %e, "login rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
