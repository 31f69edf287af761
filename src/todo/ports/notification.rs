//! Notification sink port.

use crate::todo::domain::NotificationLog;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification sink operations.
pub type NotificationSinkResult<T> = Result<T, NotificationSinkError>;

/// Append-only notification log contract.
///
/// Delivery beyond recording the entry is external; the workflow engine
/// treats append failures as fire-and-forget.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Appends a notification entry.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationSinkError::Append`] when the entry cannot be
    /// recorded.
    async fn append(&self, entry: NotificationLog) -> NotificationSinkResult<()>;
}

/// Errors returned by notification sink implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationSinkError {
    /// The entry could not be recorded.
    #[error("notification append error: {0}")]
    Append(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationSinkError {
    /// Wraps an append error.
    pub fn append(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Append(Arc::new(err))
    }
}
