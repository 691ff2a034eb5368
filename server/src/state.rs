//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the user store behind a trait object and the auth settings.

use std::sync::Arc;

use crate::config::AuthSettings;
use crate::store::UserStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, auth: AuthSettings) -> Self {
        Self { store, auth: Arc::new(auth) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::MemoryUserStore;

    /// Auth settings with the cheapest bcrypt cost so tests stay fast.
    #[must_use]
    pub fn test_auth_settings() -> AuthSettings {
        AuthSettings { jwt_secret: "test-secret".to_owned(), token_ttl_minutes: 30, bcrypt_cost: 4 }
    }

    /// Create a test `AppState` backed by an empty in-memory store.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MemoryUserStore::new()), test_auth_settings())
    }
}
