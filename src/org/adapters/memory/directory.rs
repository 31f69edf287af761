//! In-memory user directory for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::org::{
    domain::{UserId, UserRecord},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};

/// Thread-safe in-memory user directory.
///
/// Insertion order is preserved so that roster and org-chart output is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    users: HashMap<UserId, UserRecord>,
    order: Vec<UserId>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] when the directory lock is
    /// poisoned.
    pub fn upsert(&self, record: UserRecord) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        if !state.users.contains_key(&record.id()) {
            state.order.push(record.id());
        }
        state.users.insert(record.id(), record);
        Ok(())
    }
}

impl DirectoryState {
    fn in_order(&self) -> Vec<UserRecord> {
        self.order
            .iter()
            .filter_map(|id| self.users.get(id).cloned())
            .collect()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get(&self, id: UserId) -> DirectoryResult<Option<UserRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(state.users.get(&id).cloned())
    }

    async fn direct_reports(&self, id: UserId) -> DirectoryResult<Vec<UserRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(state
            .in_order()
            .into_iter()
            .filter(|record| record.manager() == Some(id))
            .collect())
    }

    async fn all_users(&self) -> DirectoryResult<Vec<UserRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(state.in_order())
    }
}
