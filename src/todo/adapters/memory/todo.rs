//! In-memory repository for todo workflow tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{SourceType, TodoId, TodoItem, TodoStatus},
    ports::{TodoPage, TodoQuery, TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Conditional updates run under a single write guard, which gives the
/// same at-most-one-winner behaviour a relational store provides with a
/// status-conditioned row update.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: HashMap<TodoId, TodoItem>,
    source_index: HashMap<(SourceType, String), TodoId>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn source_key(item: &TodoItem) -> (SourceType, String) {
    (item.source_type(), item.source_id().to_owned())
}

fn matches(item: &TodoItem, query: &TodoQuery) -> bool {
    if query.filters_assignees() && !query.assignees().contains(&item.assignee()) {
        return false;
    }
    if !query.statuses().is_empty() && !query.statuses().contains(&item.status()) {
        return false;
    }
    if let Some(source_type) = query.source_type() {
        if item.source_type() != source_type {
            return false;
        }
    }
    true
}

fn paginate(mut items: Vec<TodoItem>, query: &TodoQuery) -> TodoPage {
    // Undated items sort last, matching a NULLS LAST due-date ordering.
    items.sort_by_key(|item| (item.due_at().is_none(), item.due_at(), item.created_at()));
    let total = u64::try_from(items.len()).unwrap_or(u64::MAX);

    let offset = u64::from(query.page().saturating_sub(1)) * u64::from(query.page_size());
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.page_size()).unwrap_or(usize::MAX);
    let page_items: Vec<TodoItem> = items.into_iter().skip(offset).take(limit).collect();

    TodoPage {
        items: page_items,
        total,
        page: query.page(),
        page_size: query.page_size(),
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.todos.contains_key(&item.id()) {
            return Err(TodoRepositoryError::DuplicateTodo(item.id()));
        }
        let key = source_key(item);
        if state.source_index.contains_key(&key) {
            return Err(TodoRepositoryError::DuplicateSource {
                source_type: item.source_type(),
                source_id: item.source_id().to_owned(),
            });
        }
        state.source_index.insert(key, item.id());
        state.todos.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(
        &self,
        item: &TodoItem,
        expected_status: TodoStatus,
    ) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .todos
            .get(&item.id())
            .ok_or(TodoRepositoryError::NotFound(item.id()))?;
        if stored.status() != expected_status {
            return Err(TodoRepositoryError::StaleStatus {
                id: item.id(),
                expected: expected_status,
                actual: stored.status(),
            });
        }
        state.todos.insert(item.id(), item.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn list(&self, query: &TodoQuery) -> TodoRepositoryResult<TodoPage> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let filtered: Vec<TodoItem> = state
            .todos
            .values()
            .filter(|item| matches(item, query))
            .cloned()
            .collect();
        Ok(paginate(filtered, query))
    }
}
