//! Repository port for todo persistence and filtered queries.

use crate::org::domain::UserId;
use crate::todo::domain::{SourceType, TodoId, TodoItem, TodoStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Filtered, paginated todo query.
///
/// Pages are 1-based; results are ordered by due instant (undated items
/// last), then by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoQuery {
    assignees: Vec<UserId>,
    statuses: Vec<TodoStatus>,
    source_type: Option<SourceType>,
    page: u32,
    page_size: u32,
}

impl TodoQuery {
    /// Creates a query for the given page.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self {
            assignees: Vec::new(),
            statuses: Vec::new(),
            source_type: None,
            page,
            page_size,
        }
    }

    /// Restricts results to items assigned to any of the given users.
    ///
    /// An empty list matches nothing; omitting the filter matches all
    /// assignees.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Restricts results to items in any of the given statuses.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = TodoStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    /// Restricts results to items raised from the given source system.
    #[must_use]
    pub const fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Returns the assignee filter.
    #[must_use]
    pub fn assignees(&self) -> &[UserId] {
        &self.assignees
    }

    /// Returns whether the query filters by assignee at all.
    #[must_use]
    pub fn filters_assignees(&self) -> bool {
        !self.assignees.is_empty()
    }

    /// Returns the status filter; empty means any status.
    #[must_use]
    pub fn statuses(&self) -> &[TodoStatus] {
        &self.statuses
    }

    /// Returns the source type filter.
    #[must_use]
    pub const fn source_type(&self) -> Option<SourceType> {
        self.source_type
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    /// Items on this page, in query order.
    pub items: Vec<TodoItem>,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// The 1-based page number this page holds.
    pub page: u32,
    /// The page size the query asked for.
    pub page_size: u32,
}

impl TodoPage {
    /// Returns an empty page for the given query.
    #[must_use]
    pub const fn empty(query: &TodoQuery) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: query.page(),
            page_size: query.page_size(),
        }
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }
}

/// Todo persistence contract.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new todo item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateTodo`] when the identifier
    /// already exists, or [`TodoRepositoryError::DuplicateSource`] when
    /// another item was already raised from the same source reference.
    async fn insert(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Persists changes to an existing item, conditioned on its status.
    ///
    /// The stored status must equal `expected_status` or the update is
    /// rejected and the stored row is left untouched. This is the
    /// at-most-one-winner guard for racing transitions.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist, or [`TodoRepositoryError::StaleStatus`] when another
    /// transition won the race.
    async fn update(
        &self,
        item: &TodoItem,
        expected_status: TodoStatus,
    ) -> TodoRepositoryResult<()>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Runs a filtered, paginated query.
    async fn list(&self, query: &TodoQuery) -> TodoRepositoryResult<TodoPage>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// An item with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// An item raised from the same source reference already exists.
    #[error("duplicate source reference: {}/{source_id}", source_type.as_str())]
    DuplicateSource {
        /// Source system of the conflicting reference.
        source_type: SourceType,
        /// Reference within the source system.
        source_id: String,
    },

    /// The item was not found.
    #[error("todo item not found: {0}")]
    NotFound(TodoId),

    /// The conditional update lost a race: the stored status no longer
    /// matches the status the transition was computed against.
    #[error("stale status for {id}: expected {expected}, found {actual}")]
    StaleStatus {
        /// The item that raced.
        id: TodoId,
        /// The status the caller computed the transition against.
        expected: TodoStatus,
        /// The status actually stored.
        actual: TodoStatus,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
