//! Workflow engine: the authoritative entry point for every todo
//! lifecycle operation.
//!
//! Each operation receives the acting identity explicitly, loads the item,
//! applies a visibility gate (assignee, creator, or the assignee's direct
//! manager; everyone else observes the item as absent), delegates role and
//! state validation to the aggregate, and persists with the status the
//! transition was computed against so racing actors lose cleanly.
//! Notifications are fire-and-forget: their failure never fails the
//! transition.

use crate::org::{
    domain::{UserId, UserRecord},
    ports::{DirectoryError, UserDirectory},
};
use crate::todo::{
    domain::{
        ActionType, NewTodo, NotificationLog, OrgId, Priority, SourceType, SubmitOutcome,
        TodoDomainError, TodoEdit, TodoId, TodoItem, TodoStatus,
    },
    ports::{
        NotificationSink, TodoPage, TodoQuery, TodoRepository, TodoRepositoryError,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Request payload for creating a todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    organization: OrgId,
    assignee: UserId,
    title: String,
    description: Option<String>,
    source_type: SourceType,
    source_id: Option<String>,
    action_type: ActionType,
    priority: Priority,
    due_at: Option<DateTime<Utc>>,
    start_at: Option<DateTime<Utc>>,
    tags: Vec<String>,
    link: Option<serde_json::Value>,
}

impl CreateTodoRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        organization: OrgId,
        assignee: UserId,
        title: impl Into<String>,
        source_type: SourceType,
        action_type: ActionType,
    ) -> Self {
        Self {
            organization,
            assignee,
            title: title.into(),
            description: None,
            source_type,
            source_id: None,
            action_type,
            priority: Priority::default(),
            due_at: None,
            start_at: None,
            tags: Vec::new(),
            link: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the origin reference; a random one is generated when omitted.
    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due instant.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the planned start instant.
    #[must_use]
    pub const fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    /// Sets the tag set.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the opaque UI link payload.
    #[must_use]
    pub fn with_link(mut self, link: serde_json::Value) -> Self {
        self.link = Some(link);
        self
    }
}

/// Status filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatusFilter {
    /// Still-actionable work: open, in progress, or blocked.
    Open,
    /// Exactly one status.
    Exact(TodoStatus),
}

impl ListStatusFilter {
    /// Expands the filter to the concrete status set.
    #[must_use]
    pub fn statuses(self) -> Vec<TodoStatus> {
        match self {
            Self::Open => vec![
                TodoStatus::Open,
                TodoStatus::InProgress,
                TodoStatus::Blocked,
            ],
            Self::Exact(status) => vec![status],
        }
    }
}

/// A manager's view over their direct reports' work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTodoPage {
    /// The subordinates' items, paginated.
    pub page: TodoPage,
    /// The direct-report roster the page was computed over.
    pub subordinates: Vec<UserRecord>,
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The item does not exist, or the actor has no visibility over it.
    /// The two cases are deliberately indistinguishable.
    #[error("todo item not found: {0}")]
    NotFound(TodoId),
    /// Role or state validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Stable error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowErrorKind {
    /// Absent or not visible.
    NotFound,
    /// The actor lacks the role the operation requires.
    Forbidden,
    /// The source state does not permit the requested transition, or the
    /// transition lost a race.
    Validation,
    /// A required field was missing or blank.
    InvalidInput,
    /// Infrastructure failure.
    Internal,
}

impl WorkflowError {
    /// Classifies the error into the stable taxonomy.
    #[must_use]
    pub const fn kind(&self) -> WorkflowErrorKind {
        match self {
            Self::NotFound(_) | Self::Repository(TodoRepositoryError::NotFound(_)) => {
                WorkflowErrorKind::NotFound
            }
            Self::Domain(
                TodoDomainError::NotAssignee
                | TodoDomainError::NotReviewer
                | TodoDomainError::StatusChangeNotPermitted
                | TodoDomainError::NotEditor,
            ) => WorkflowErrorKind::Forbidden,
            Self::Domain(TodoDomainError::InvalidStateTransition { .. })
            | Self::Repository(TodoRepositoryError::StaleStatus { .. }) => {
                WorkflowErrorKind::Validation
            }
            Self::Domain(
                TodoDomainError::ReasonRequired(_) | TodoDomainError::EmptyTitle,
            ) => WorkflowErrorKind::InvalidInput,
            Self::Repository(_) | Self::Directory(_) => WorkflowErrorKind::Internal,
        }
    }
}

/// Result type for workflow service operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// A loaded item together with the actor's relationship to it.
struct VisibleTodo {
    item: TodoItem,
    actor_manages_assignee: bool,
}

/// Todo workflow orchestration service.
#[derive(Clone)]
pub struct WorkflowService<R, D, N, C>
where
    R: TodoRepository,
    D: UserDirectory,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    todos: Arc<R>,
    directory: Arc<D>,
    notifications: Arc<N>,
    clock: Arc<C>,
}

impl<R, D, N, C> WorkflowService<R, D, N, C>
where
    R: TodoRepository,
    D: UserDirectory,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(todos: Arc<R>, directory: Arc<D>, notifications: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            todos,
            directory,
            notifications,
            clock,
        }
    }

    /// Creates a new open todo item and notifies the assignee's manager.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the title is blank or persistence
    /// rejects the item.
    pub async fn create(
        &self,
        actor: UserId,
        request: CreateTodoRequest,
    ) -> WorkflowResult<TodoItem> {
        let source_id = request
            .source_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let item = TodoItem::new(
            NewTodo {
                organization: request.organization,
                assignee: request.assignee,
                creator: actor,
                title: request.title,
                description: request.description,
                source_type: request.source_type,
                source_id,
                action_type: request.action_type,
                priority: request.priority,
                due_at: request.due_at,
                start_at: request.start_at,
                tags: request.tags,
                link: request.link,
            },
            &*self.clock,
        )?;
        self.todos.insert(&item).await?;
        tracing::debug!(todo_id = %item.id(), assignee = %item.assignee(), "todo created");

        self.notify_manager_of(item.assignee(), &item).await;
        Ok(item)
    }

    /// Begins work on an item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the assignee, or the item is not open.
    pub async fn start(&self, actor: UserId, id: TodoId) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.start(actor, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Submits an item as complete.
    ///
    /// Self-created items complete immediately; delegated items enter
    /// review and the designated reviewer is notified.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the assignee, or the state does not permit
    /// submission.
    pub async fn submit(&self, actor: UserId, id: TodoId) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        let outcome = loaded.item.submit(actor, &*self.clock)?;
        let item = self.persist(&loaded.item, expected).await?;

        if outcome == SubmitOutcome::SentForReview {
            self.notify(item.creator(), &item).await;
        }
        Ok(item)
    }

    /// Accepts submitted work.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the designated reviewer, or the item is not
    /// pending review.
    pub async fn approve(
        &self,
        actor: UserId,
        id: TodoId,
        comment: Option<String>,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.approve(actor, comment, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Sends submitted work back to the assignee.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the designated reviewer, or the item is not
    /// pending review.
    pub async fn reject(
        &self,
        actor: UserId,
        id: TodoId,
        comment: Option<String>,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.reject(actor, comment, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Marks active work as blocked.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the assignee, the reason is blank, or the item is
    /// not active.
    pub async fn block(
        &self,
        actor: UserId,
        id: TodoId,
        reason: &str,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.block(actor, reason, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Abandons an item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is not the assignee, the reason is blank, or the item is
    /// already terminal.
    pub async fn dismiss(
        &self,
        actor: UserId,
        id: TodoId,
        reason: &str,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.dismiss(actor, reason, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Applies a backward status change from the declarative table.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the pair is not in the table, or the actor holds none of the roles
    /// the pair requires.
    pub async fn change_status(
        &self,
        actor: UserId,
        id: TodoId,
        target: TodoStatus,
        comment: Option<String>,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.change_status(
            actor,
            target,
            comment,
            loaded.actor_manages_assignee,
            &*self.clock,
        )?;
        self.persist(&loaded.item, expected).await
    }

    /// Applies a non-lifecycle metadata patch.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the item is not visible to the actor,
    /// the actor is neither assignee nor creator, or the patch carries a
    /// blank title.
    pub async fn update_details(
        &self,
        actor: UserId,
        id: TodoId,
        edit: TodoEdit,
    ) -> WorkflowResult<TodoItem> {
        let mut loaded = self.load_visible(actor, id).await?;
        let expected = loaded.item.status();
        loaded.item.apply_edit(actor, edit, &*self.clock)?;
        self.persist(&loaded.item, expected).await
    }

    /// Fetches a single item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when the item does not exist or
    /// the actor has no visibility over it.
    pub async fn get(&self, actor: UserId, id: TodoId) -> WorkflowResult<TodoItem> {
        Ok(self.load_visible(actor, id).await?.item)
    }

    /// Lists the actor's own items, due-date ordered.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Repository`] when the query fails.
    pub async fn list_mine(
        &self,
        actor: UserId,
        status: Option<ListStatusFilter>,
        source_type: Option<SourceType>,
        page: u32,
        page_size: u32,
    ) -> WorkflowResult<TodoPage> {
        let mut query = TodoQuery::new(page, page_size).with_assignees([actor]);
        if let Some(filter) = status {
            query = query.with_statuses(filter.statuses());
        }
        if let Some(source) = source_type {
            query = query.with_source_type(source);
        }
        Ok(self.todos.list(&query).await?)
    }

    /// Lists the items of the actor's direct reports, one level only.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError`] when the roster lookup or the query fails.
    pub async fn list_team(
        &self,
        actor: UserId,
        status: Option<TodoStatus>,
        page: u32,
        page_size: u32,
    ) -> WorkflowResult<TeamTodoPage> {
        let subordinates = self.directory.direct_reports(actor).await?;
        let mut query = TodoQuery::new(page, page_size)
            .with_assignees(subordinates.iter().map(UserRecord::id));
        if let Some(filter) = status {
            query = query.with_statuses([filter]);
        }
        if subordinates.is_empty() {
            return Ok(TeamTodoPage {
                page: TodoPage::empty(&query),
                subordinates,
            });
        }
        let page_result = self.todos.list(&query).await?;
        Ok(TeamTodoPage {
            page: page_result,
            subordinates,
        })
    }

    /// Loads an item and applies the visibility gate.
    ///
    /// Visible to the assignee, the creator, and the assignee's direct
    /// manager; everyone else gets [`WorkflowError::NotFound`], the same
    /// answer as for an absent item.
    async fn load_visible(&self, actor: UserId, id: TodoId) -> WorkflowResult<VisibleTodo> {
        let Some(item) = self.todos.find_by_id(id).await? else {
            return Err(WorkflowError::NotFound(id));
        };
        let assignee_record = self.directory.get(item.assignee()).await?;
        let actor_manages_assignee =
            assignee_record.is_some_and(|record| record.manager() == Some(actor));

        let visible =
            actor == item.assignee() || actor == item.creator() || actor_manages_assignee;
        if !visible {
            return Err(WorkflowError::NotFound(id));
        }
        Ok(VisibleTodo {
            item,
            actor_manages_assignee,
        })
    }

    /// Persists a mutated item, conditioned on its pre-transition status.
    async fn persist(&self, item: &TodoItem, expected: TodoStatus) -> WorkflowResult<TodoItem> {
        self.todos.update(item, expected).await?;
        tracing::debug!(
            todo_id = %item.id(),
            from = expected.as_str(),
            to = item.status().as_str(),
            "todo transition persisted"
        );
        Ok(item.clone())
    }

    /// Records an in-app notification; failures are logged and swallowed.
    async fn notify(&self, recipient: UserId, item: &TodoItem) {
        let entry = NotificationLog::in_app(item.id(), recipient, &*self.clock);
        if let Err(err) = self.notifications.append(entry).await {
            tracing::warn!(todo_id = %item.id(), error = %err, "notification append failed");
        }
    }

    /// Notifies the manager of `user`, if one exists and can be resolved.
    async fn notify_manager_of(&self, user: UserId, item: &TodoItem) {
        match self.directory.get(user).await {
            Ok(Some(record)) => {
                if let Some(manager) = record.manager() {
                    self.notify(manager, item).await;
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(todo_id = %item.id(), error = %err, "manager resolution failed");
            }
        }
    }
}
