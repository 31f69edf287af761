//! Directory port for user lookup and reporting queries.

use crate::org::domain::{UserId, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// User lookup contract.
///
/// The directory is owned by the surrounding identity system; this port
/// exposes only what the hierarchy resolver and the workflow engine need.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn get(&self, id: UserId) -> DirectoryResult<Option<UserRecord>>;

    /// Returns the users whose direct manager is `id`, in directory order.
    async fn direct_reports(&self, id: UserId) -> DirectoryResult<Vec<UserRecord>>;

    /// Returns every user known to the directory.
    async fn all_users(&self) -> DirectoryResult<Vec<UserRecord>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Backend lookup failure.
    #[error("directory lookup error: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
