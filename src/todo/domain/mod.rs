//! Domain model for the todo lifecycle.
//!
//! The todo domain models the work item aggregate, its state machine, and
//! the notification record emitted on lifecycle events, while keeping all
//! persistence concerns outside of the domain boundary.

mod error;
mod ids;
mod notification;
mod todo;

pub use error::{ParseTodoStatusError, TodoDomainError};
pub use ids::{NotificationId, OrgId, TodoId};
pub use notification::{NotificationChannel, NotificationLog, NotificationStatus};
pub use todo::{
    ActionType, DEFAULT_REJECT_COMMENT, NewTodo, PersistedTodoData, Priority, ReopenAuthority,
    SourceType, SubmitOutcome, TodoEdit, TodoItem, TodoStatus,
};
