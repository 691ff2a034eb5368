//! User persistence.
//!
//! ARCHITECTURE
//! ============
//! Handlers and services see only the [`UserStore`] trait. `PgUserStore` is
//! used when `DATABASE_URL` is set; `MemoryUserStore` otherwise and in tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// A registered user as stored: the password is only ever kept hashed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub hashed_password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Storage backend for registered users.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the username is taken.
    async fn insert_user(&self, record: UserRecord) -> Result<(), StoreError>;

    /// Look up a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Db`] if the backend fails.
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Short backend name for startup logs.
    fn kind(&self) -> &'static str;
}
