//! Shared builders for todo tests.

use crate::org::domain::UserId;
use crate::todo::domain::{ActionType, NewTodo, OrgId, Priority, SourceType, TodoItem};
use mockable::DefaultClock;
use uuid::Uuid;

pub fn new_todo(assignee: UserId, creator: UserId) -> NewTodo {
    NewTodo {
        organization: OrgId::new(),
        assignee,
        creator,
        title: "Quarterly report".to_owned(),
        description: None,
        source_type: SourceType::ProjectTask,
        source_id: Uuid::new_v4().to_string(),
        action_type: ActionType::Do,
        priority: Priority::default(),
        due_at: None,
        start_at: None,
        tags: Vec::new(),
        link: None,
    }
}

/// An open item where creator and assignee differ, so review applies.
pub fn delegated_item(assignee: UserId, creator: UserId) -> TodoItem {
    TodoItem::new(new_todo(assignee, creator), &DefaultClock).expect("valid todo")
}

/// An open item the assignee created for themselves.
pub fn self_item(user: UserId) -> TodoItem {
    delegated_item(user, user)
}
