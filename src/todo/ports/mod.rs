//! Port contracts for the todo module.

pub mod notification;
pub mod repository;

pub use notification::{NotificationSink, NotificationSinkError, NotificationSinkResult};
pub use repository::{
    TodoPage, TodoQuery, TodoRepository, TodoRepositoryError, TodoRepositoryResult,
};
