//! Append-only notification records.

use super::{NotificationId, TodoId};
use crate::org::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Delivery channel for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    /// Delivered inside the application.
    InApp,
    /// Delivered by email.
    Email,
    /// Delivered to an external webhook.
    Webhook,
}

/// Delivery status of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// Queued but not yet delivered.
    Pending,
    /// Delivered.
    Sent,
    /// Delivery failed.
    Failed,
}

/// One generated notification, addressed to a resolved recipient.
///
/// Records are created once and never mutated. In-app delivery amounts to
/// writing the record, so in-app entries are born sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLog {
    /// Unique entry identifier.
    pub id: NotificationId,
    /// The todo item the notification is about.
    pub todo_id: TodoId,
    /// Who receives the notification.
    pub recipient: UserId,
    /// Delivery channel.
    pub channel: NotificationChannel,
    /// Delivery status.
    pub status: NotificationStatus,
    /// Delivery instant, when delivered.
    pub sent_at: Option<DateTime<Utc>>,
    /// Failure detail, when delivery failed.
    pub error_message: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NotificationLog {
    /// Creates a sent in-app notification entry.
    #[must_use]
    pub fn in_app(todo_id: TodoId, recipient: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: NotificationId::new(),
            todo_id,
            recipient,
            channel: NotificationChannel::InApp,
            status: NotificationStatus::Sent,
            sent_at: Some(timestamp),
            error_message: None,
            created_at: timestamp,
        }
    }
}
