//! User records as consumed from the directory.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A user as seen by the hierarchy resolver.
///
/// Each user has at most one manager. The manager links form a forest in
/// healthy data; cycles are possible through data corruption and are
/// defended against wherever a chain is walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    manager: Option<UserId>,
    display_name: String,
    active: bool,
}

impl UserRecord {
    /// Creates an active user record with no manager.
    #[must_use]
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            manager: None,
            display_name: display_name.into(),
            active: true,
        }
    }

    /// Sets the user's direct manager.
    #[must_use]
    pub const fn with_manager(mut self, manager: UserId) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Marks the user as inactive.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the direct manager, if any.
    #[must_use]
    pub const fn manager(&self) -> Option<UserId> {
        self.manager
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns whether the user is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
