//! Error types for todo domain validation and parsing.

use super::{TodoId, TodoStatus};
use thiserror::Error;

/// Errors returned while validating todo lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The requested transition is not in the transition table.
    #[error("invalid state transition for {todo_id}: {} -> {}", from.as_str(), to.as_str())]
    InvalidStateTransition {
        /// The todo item being transitioned.
        todo_id: TodoId,
        /// The state the item is currently in.
        from: TodoStatus,
        /// The state the caller requested.
        to: TodoStatus,
    },

    /// The acting user is not the assignee of the item.
    #[error("only the assignee may perform this action")]
    NotAssignee,

    /// The acting user is not the designated reviewer of the item.
    #[error("only the designated reviewer may review this item")]
    NotReviewer,

    /// The acting user holds none of the roles the backward transition
    /// requires.
    #[error("the actor is not permitted to perform this status change")]
    StatusChangeNotPermitted,

    /// The acting user may not edit this item's details.
    #[error("only the assignee or creator may edit this item")]
    NotEditor,

    /// A required reason was missing or blank.
    #[error("a non-empty reason is required to {0} an item")]
    ReasonRequired(&'static str),

    /// The title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing todo statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo status: {0}")]
pub struct ParseTodoStatusError(pub String);
