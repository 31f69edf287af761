//! In-memory notification log for workflow tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::NotificationLog,
    ports::{NotificationSink, NotificationSinkError, NotificationSinkResult},
};

/// Thread-safe in-memory notification sink.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationSink {
    entries: Arc<RwLock<Vec<NotificationLog>>>,
}

impl InMemoryNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded entries in append order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationSinkError::Append`] when the sink lock is
    /// poisoned.
    pub fn entries(&self) -> NotificationSinkResult<Vec<NotificationLog>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| NotificationSinkError::append(std::io::Error::other(err.to_string())))?;
        Ok(entries.clone())
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn append(&self, entry: NotificationLog) -> NotificationSinkResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| NotificationSinkError::append(std::io::Error::other(err.to_string())))?;
        entries.push(entry);
        Ok(())
    }
}
