//! Process-local user store.
//!
//! Users vanish on restart. Used when no database is configured.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio::sync::RwLock;

use super::{StoreError, UserRecord, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        match users.entry(record.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.username)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
