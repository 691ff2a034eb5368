mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::store::{MemoryUserStore, PgUserStore, UserStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.uses_dev_secret() {
        tracing::warn!("AUTH_DEV_MODE set and JWT_SECRET missing; using the development signing secret");
    }

    let store: Arc<dyn UserStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; users are kept in memory and lost on restart");
            Arc::new(MemoryUserStore::new())
        }
    };
    tracing::info!(store = store.kind(), "user store ready");

    let state = state::AppState::new(store, config.auth.clone());

    let app = match routes::leptos_app(state.clone(), &config.allowed_origins) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos site not configured; serving the auth API only");
            routes::api_routes(state, &config.allowed_origins)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, origins = ?config.allowed_origins, "credentials portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
