//! Todo aggregate root and the lifecycle state machine.

use super::{OrgId, ParseTodoStatusError, TodoDomainError, TodoId};
use crate::org::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review comment recorded when a rejection carries no comment of its own.
pub const DEFAULT_REJECT_COMMENT: &str = "Please revise and resubmit.";

/// Todo lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Work has been defined but not started.
    Open,
    /// Work is underway.
    InProgress,
    /// Work is stalled on an external impediment.
    Blocked,
    /// Work has been submitted and awaits review.
    PendingReview,
    /// Work has been completed and accepted.
    Done,
    /// The item has been abandoned by its assignee.
    Dismissed,
}

impl TodoStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::PendingReview => "pending_review",
            Self::Done => "done",
            Self::Dismissed => "dismissed",
        }
    }

    /// Returns `true` when no further transition is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Dismissed)
    }

    /// Returns `true` for the states in which the assignee is working.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    /// Returns `true` for the states a submission may be made from.
    #[must_use]
    pub const fn can_submit_from(self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Blocked)
    }

    /// Looks up the backward transition rule for `self -> target`.
    ///
    /// The table is exhaustive and deny-by-default: any pair it does not
    /// name is an invalid transition. Forward moves are owned by the named
    /// operations (`start`, `submit`, `approve`, ...), never by this table.
    #[must_use]
    pub const fn reopen_rule(self, target: Self) -> Option<ReopenAuthority> {
        match (self, target) {
            (Self::InProgress, Self::Open) => Some(ReopenAuthority::Assignee),
            (Self::PendingReview, Self::InProgress | Self::Open) => {
                Some(ReopenAuthority::AssigneeOrReviewer)
            }
            (Self::Done, Self::InProgress | Self::Open) => {
                Some(ReopenAuthority::ReviewerOrManager)
            }
            _ => None,
        }
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "pending_review" => Ok(Self::PendingReview),
            "done" => Ok(Self::Done),
            "dismissed" => Ok(Self::Dismissed),
            _ => Err(ParseTodoStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may perform a backward status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReopenAuthority {
    /// Only the assignee (self-reset of own work).
    Assignee,
    /// The assignee recalling a submission, or the reviewer bouncing it.
    AssigneeOrReviewer,
    /// The reviewer or the assignee's direct manager (reopening done work).
    ReviewerOrManager,
}

/// Origin system the todo was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// A project stage or task.
    ProjectTask,
    /// A step in an approval chain.
    ApprovalStep,
    /// A contract deadline reminder.
    ContractReminder,
    /// A finance follow-up action.
    FinanceAction,
    /// A free-standing request.
    Custom,
}

impl SourceType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectTask => "project_task",
            Self::ApprovalStep => "approval_step",
            Self::ContractReminder => "contract_reminder",
            Self::FinanceAction => "finance_action",
            Self::Custom => "custom",
        }
    }
}

/// What kind of action the assignee is expected to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Perform the work itself.
    Do,
    /// Approve something.
    Approve,
    /// Review something.
    Review,
    /// Acknowledge receipt.
    Acknowledge,
}

impl ActionType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Approve => "approve",
            Self::Review => "review",
            Self::Acknowledge => "acknowledge",
        }
    }
}

/// Todo priority, p0 highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Drop everything.
    P0,
    /// Urgent.
    P1,
    /// Normal (the default).
    P2,
    /// Low.
    P3,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P0 => "p0",
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::P2
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Creator and assignee are the same identity: completion is
    /// self-certified and the item is done.
    AutoApproved,
    /// The item awaits review by the designated reviewer.
    SentForReview,
}

/// Parameters for creating a new todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Organisation (tenant) the item belongs to.
    pub organization: OrgId,
    /// Who must perform the work.
    pub assignee: UserId,
    /// Who defined the work.
    pub creator: UserId,
    /// Short summary of the work.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Origin system of the item.
    pub source_type: SourceType,
    /// Origin reference within the source system.
    pub source_id: String,
    /// Kind of action expected from the assignee.
    pub action_type: ActionType,
    /// Priority, p2 when unspecified upstream.
    pub priority: Priority,
    /// Due instant, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Planned start instant, if any.
    pub start_at: Option<DateTime<Utc>>,
    /// Free-form tags; order is irrelevant and duplicates are collapsed.
    pub tags: Vec<String>,
    /// Opaque reference to related UI context.
    pub link: Option<serde_json::Value>,
}

/// Patch of non-lifecycle metadata.
///
/// `None` fields are left untouched; lifecycle fields are deliberately
/// absent and can only move through the transition operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEdit {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due instant.
    pub due_at: Option<DateTime<Utc>>,
    /// Replacement planned start instant.
    pub start_at: Option<DateTime<Utc>>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
}

/// Todo aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    organization: OrgId,
    assignee: UserId,
    creator: UserId,
    title: String,
    description: Option<String>,
    source_type: SourceType,
    source_id: String,
    action_type: ActionType,
    priority: Priority,
    status: TodoStatus,
    due_at: Option<DateTime<Utc>>,
    start_at: Option<DateTime<Utc>>,
    done_at: Option<DateTime<Utc>>,
    review_comment: Option<String>,
    reviewed_by: Option<UserId>,
    done_by: Option<UserId>,
    blocked_reason: Option<String>,
    dismiss_reason: Option<String>,
    tags: Vec<String>,
    link: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted organisation scope.
    pub organization: OrgId,
    /// Persisted assignee.
    pub assignee: UserId,
    /// Persisted creator.
    pub creator: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted source type.
    pub source_type: SourceType,
    /// Persisted source reference.
    pub source_id: String,
    /// Persisted action type.
    pub action_type: ActionType,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: TodoStatus,
    /// Persisted due instant.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted start instant.
    pub start_at: Option<DateTime<Utc>>,
    /// Persisted completion instant.
    pub done_at: Option<DateTime<Utc>>,
    /// Persisted review comment.
    pub review_comment: Option<String>,
    /// Persisted reviewer.
    pub reviewed_by: Option<UserId>,
    /// Persisted completer.
    pub done_by: Option<UserId>,
    /// Persisted blocked reason.
    pub blocked_reason: Option<String>,
    /// Persisted dismissal reason.
    pub dismiss_reason: Option<String>,
    /// Persisted tags.
    pub tags: Vec<String>,
    /// Persisted link payload.
    pub link: Option<serde_json::Value>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new open todo item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the title is blank.
    pub fn new(data: NewTodo, clock: &impl Clock) -> Result<Self, TodoDomainError> {
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();

        Ok(Self {
            id: TodoId::new(),
            organization: data.organization,
            assignee: data.assignee,
            creator: data.creator,
            title,
            description: data.description,
            source_type: data.source_type,
            source_id: data.source_id,
            action_type: data.action_type,
            priority: data.priority,
            status: TodoStatus::Open,
            due_at: data.due_at,
            start_at: data.start_at,
            done_at: None,
            review_comment: None,
            reviewed_by: None,
            done_by: None,
            blocked_reason: None,
            dismiss_reason: None,
            tags: normalize_tags(data.tags),
            link: data.link,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a todo item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            organization: data.organization,
            assignee: data.assignee,
            creator: data.creator,
            title: data.title,
            description: data.description,
            source_type: data.source_type,
            source_id: data.source_id,
            action_type: data.action_type,
            priority: data.priority,
            status: data.status,
            due_at: data.due_at,
            start_at: data.start_at,
            done_at: data.done_at,
            review_comment: data.review_comment,
            reviewed_by: data.reviewed_by,
            done_by: data.done_by,
            blocked_reason: data.blocked_reason,
            dismiss_reason: data.dismiss_reason,
            tags: data.tags,
            link: data.link,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Begins work on an open item.
    ///
    /// Sets the start instant when none was planned.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotAssignee`] for any actor other than the
    /// assignee, or [`TodoDomainError::InvalidStateTransition`] when the
    /// item is not open.
    pub fn start(&mut self, actor: UserId, clock: &impl Clock) -> Result<(), TodoDomainError> {
        self.ensure_assignee(actor)?;
        if self.status != TodoStatus::Open {
            return Err(self.invalid_transition(TodoStatus::InProgress));
        }
        self.status = TodoStatus::InProgress;
        if self.start_at.is_none() {
            self.start_at = Some(clock.utc());
        }
        self.touch(clock);
        Ok(())
    }

    /// Submits the item as complete.
    ///
    /// A self-created item is self-certified and moves straight to done;
    /// otherwise the item enters review and any previous review comment is
    /// cleared. Leaving the blocked state always clears the blocked reason.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotAssignee`] for any actor other than the
    /// assignee, or [`TodoDomainError::InvalidStateTransition`] when the
    /// item is not open, in progress, or blocked.
    pub fn submit(
        &mut self,
        actor: UserId,
        clock: &impl Clock,
    ) -> Result<SubmitOutcome, TodoDomainError> {
        self.ensure_assignee(actor)?;
        let self_certified = self.reviewer().is_none();
        let target = if self_certified {
            TodoStatus::Done
        } else {
            TodoStatus::PendingReview
        };
        if !self.status.can_submit_from() {
            return Err(self.invalid_transition(target));
        }

        self.blocked_reason = None;
        if self_certified {
            self.status = TodoStatus::Done;
            self.done_at = Some(clock.utc());
            self.done_by = Some(actor);
            self.reviewed_by = Some(actor);
            self.touch(clock);
            Ok(SubmitOutcome::AutoApproved)
        } else {
            self.status = TodoStatus::PendingReview;
            self.review_comment = None;
            self.touch(clock);
            Ok(SubmitOutcome::SentForReview)
        }
    }

    /// Accepts submitted work.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotReviewer`] for any actor other than the
    /// designated reviewer, or [`TodoDomainError::InvalidStateTransition`]
    /// when the item is not pending review.
    pub fn approve(
        &mut self,
        actor: UserId,
        comment: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        self.ensure_reviewer(actor)?;
        if self.status != TodoStatus::PendingReview {
            return Err(self.invalid_transition(TodoStatus::Done));
        }
        self.status = TodoStatus::Done;
        self.done_at = Some(clock.utc());
        self.done_by = Some(self.assignee);
        self.reviewed_by = Some(actor);
        self.review_comment = normalize_comment(comment);
        self.touch(clock);
        Ok(())
    }

    /// Sends submitted work back to the assignee.
    ///
    /// The review comment is always set; a blank comment is replaced by
    /// [`DEFAULT_REJECT_COMMENT`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotReviewer`] for any actor other than the
    /// designated reviewer, or [`TodoDomainError::InvalidStateTransition`]
    /// when the item is not pending review.
    pub fn reject(
        &mut self,
        actor: UserId,
        comment: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        self.ensure_reviewer(actor)?;
        if self.status != TodoStatus::PendingReview {
            return Err(self.invalid_transition(TodoStatus::Open));
        }
        self.status = TodoStatus::Open;
        self.reviewed_by = Some(actor);
        self.review_comment =
            Some(normalize_comment(comment).unwrap_or_else(|| DEFAULT_REJECT_COMMENT.to_owned()));
        self.touch(clock);
        Ok(())
    }

    /// Marks active work as blocked.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotAssignee`] for any actor other than the
    /// assignee, [`TodoDomainError::ReasonRequired`] when the reason is
    /// blank, or [`TodoDomainError::InvalidStateTransition`] when the item
    /// is not open or in progress.
    pub fn block(
        &mut self,
        actor: UserId,
        reason: &str,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        self.ensure_assignee(actor)?;
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::ReasonRequired("block"));
        }
        if !self.status.is_active() {
            return Err(self.invalid_transition(TodoStatus::Blocked));
        }
        self.status = TodoStatus::Blocked;
        self.blocked_reason = Some(trimmed.to_owned());
        self.touch(clock);
        Ok(())
    }

    /// Abandons the item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotAssignee`] for any actor other than the
    /// assignee, [`TodoDomainError::ReasonRequired`] when the reason is
    /// blank, or [`TodoDomainError::InvalidStateTransition`] when the item
    /// is already terminal.
    pub fn dismiss(
        &mut self,
        actor: UserId,
        reason: &str,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        self.ensure_assignee(actor)?;
        let trimmed = reason.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::ReasonRequired("dismiss"));
        }
        if self.status.is_terminal() {
            return Err(self.invalid_transition(TodoStatus::Dismissed));
        }
        self.blocked_reason = None;
        self.status = TodoStatus::Dismissed;
        self.dismiss_reason = Some(trimmed.to_owned());
        self.touch(clock);
        Ok(())
    }

    /// Applies a backward status change from the declarative table.
    ///
    /// Fields that lose meaning are cleared: completion fields when leaving
    /// done, the start instant when returning to open. A comment, when
    /// given, is recorded as the review comment.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidStateTransition`] when the pair is
    /// not in the table, or [`TodoDomainError::StatusChangeNotPermitted`]
    /// when the actor holds none of the required roles.
    pub fn change_status(
        &mut self,
        actor: UserId,
        target: TodoStatus,
        comment: Option<String>,
        actor_manages_assignee: bool,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        let Some(rule) = self.status.reopen_rule(target) else {
            return Err(self.invalid_transition(target));
        };
        let permitted = match rule {
            ReopenAuthority::Assignee => actor == self.assignee,
            ReopenAuthority::AssigneeOrReviewer => {
                actor == self.assignee || self.reviewer() == Some(actor)
            }
            ReopenAuthority::ReviewerOrManager => {
                self.reviewer() == Some(actor) || actor_manages_assignee
            }
        };
        if !permitted {
            return Err(TodoDomainError::StatusChangeNotPermitted);
        }

        if self.status == TodoStatus::Done {
            self.done_at = None;
            self.done_by = None;
            self.reviewed_by = None;
        }
        if target == TodoStatus::Open {
            self.start_at = None;
        }
        if let Some(text) = normalize_comment(comment) {
            self.review_comment = Some(text);
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Applies a metadata patch.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::NotEditor`] for actors other than the
    /// assignee or creator, or [`TodoDomainError::EmptyTitle`] when the
    /// patch carries a blank title.
    pub fn apply_edit(
        &mut self,
        actor: UserId,
        edit: TodoEdit,
        clock: &impl Clock,
    ) -> Result<(), TodoDomainError> {
        if actor != self.assignee && actor != self.creator {
            return Err(TodoDomainError::NotEditor);
        }
        if let Some(title) = edit.title {
            let trimmed = title.trim().to_owned();
            if trimmed.is_empty() {
                return Err(TodoDomainError::EmptyTitle);
            }
            self.title = trimmed;
        }
        if let Some(description) = edit.description {
            self.description = Some(description);
        }
        if let Some(priority) = edit.priority {
            self.priority = priority;
        }
        if let Some(due_at) = edit.due_at {
            self.due_at = Some(due_at);
        }
        if let Some(start_at) = edit.start_at {
            self.start_at = Some(start_at);
        }
        if let Some(tags) = edit.tags {
            self.tags = normalize_tags(tags);
        }
        self.touch(clock);
        Ok(())
    }

    /// Returns the designated reviewer.
    ///
    /// The creator reviews delegated work; a self-created item has no
    /// reviewer and completes by self-certification.
    #[must_use]
    pub fn reviewer(&self) -> Option<UserId> {
        (self.creator != self.assignee).then_some(self.creator)
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the organisation scope.
    #[must_use]
    pub const fn organization(&self) -> OrgId {
        self.organization
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> UserId {
        self.assignee
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator(&self) -> UserId {
        self.creator
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the source type.
    #[must_use]
    pub const fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Returns the source reference.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Returns the action type.
    #[must_use]
    pub const fn action_type(&self) -> ActionType {
        self.action_type
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the due instant, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the start instant, if any.
    #[must_use]
    pub const fn start_at(&self) -> Option<DateTime<Utc>> {
        self.start_at
    }

    /// Returns the completion instant, if any.
    #[must_use]
    pub const fn done_at(&self) -> Option<DateTime<Utc>> {
        self.done_at
    }

    /// Returns the review comment, if any.
    #[must_use]
    pub fn review_comment(&self) -> Option<&str> {
        self.review_comment.as_deref()
    }

    /// Returns who reviewed the item, if anyone.
    #[must_use]
    pub const fn reviewed_by(&self) -> Option<UserId> {
        self.reviewed_by
    }

    /// Returns who completed the item, if anyone.
    #[must_use]
    pub const fn done_by(&self) -> Option<UserId> {
        self.done_by
    }

    /// Returns the blocked reason, present only while blocked.
    #[must_use]
    pub fn blocked_reason(&self) -> Option<&str> {
        self.blocked_reason.as_deref()
    }

    /// Returns the dismissal reason, if any.
    #[must_use]
    pub fn dismiss_reason(&self) -> Option<&str> {
        self.dismiss_reason.as_deref()
    }

    /// Returns the tag set, sorted.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the opaque UI link payload, if any.
    #[must_use]
    pub const fn link(&self) -> Option<&serde_json::Value> {
        self.link.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn ensure_assignee(&self, actor: UserId) -> Result<(), TodoDomainError> {
        if actor == self.assignee {
            Ok(())
        } else {
            Err(TodoDomainError::NotAssignee)
        }
    }

    fn ensure_reviewer(&self, actor: UserId) -> Result<(), TodoDomainError> {
        if self.reviewer() == Some(actor) {
            Ok(())
        } else {
            Err(TodoDomainError::NotReviewer)
        }
    }

    const fn invalid_transition(&self, to: TodoStatus) -> TodoDomainError {
        TodoDomainError::InvalidStateTransition {
            todo_id: self.id,
            from: self.status,
            to,
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Collapses duplicates and normalizes ordering; tag order is irrelevant.
fn normalize_tags(mut tags: Vec<String>) -> Vec<String> {
    tags.sort();
    tags.dedup();
    tags
}

/// Trims a caller-supplied comment, mapping blank input to `None`.
fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
