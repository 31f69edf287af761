//! In-memory adapters for todo persistence and notification logging.

mod notification;
mod todo;

pub use notification::InMemoryNotificationSink;
pub use todo::InMemoryTodoRepository;
