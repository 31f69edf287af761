//! Shared world state for todo review BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use steward::org::{
    adapters::memory::InMemoryUserDirectory,
    domain::{UserId, UserRecord},
};
use steward::todo::{
    adapters::memory::{InMemoryNotificationSink, InMemoryTodoRepository},
    domain::{OrgId, TodoItem},
    services::{WorkflowError, WorkflowService},
};

/// Service type used by the BDD world.
pub type TestWorkflowService = WorkflowService<
    InMemoryTodoRepository,
    InMemoryUserDirectory,
    InMemoryNotificationSink,
    DefaultClock,
>;

/// Scenario world for todo review behaviour tests.
pub struct TodoReviewWorld {
    pub service: TestWorkflowService,
    pub directory: InMemoryUserDirectory,
    pub sink: InMemoryNotificationSink,
    pub organization: OrgId,
    pub users: HashMap<String, UserId>,
    pub todo: Option<TodoItem>,
    pub last_result: Option<Result<TodoItem, WorkflowError>>,
}

impl TodoReviewWorld {
    /// Creates a world with an empty directory and no scenario state.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryUserDirectory::new();
        let sink = InMemoryNotificationSink::new();
        let service = WorkflowService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(directory.clone()),
            Arc::new(sink.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            directory,
            sink,
            organization: OrgId::new(),
            users: HashMap::new(),
            todo: None,
            last_result: None,
        }
    }

    /// Registers a named user, optionally under a previously named manager.
    pub fn register_user(
        &mut self,
        name: &str,
        manager: Option<UserId>,
    ) -> Result<UserId, eyre::Report> {
        let id = UserId::new();
        let mut record = UserRecord::new(id, name);
        if let Some(manager) = manager {
            record = record.with_manager(manager);
        }
        self.directory
            .upsert(record)
            .map_err(|err| eyre::eyre!("seed user {name}: {err}"))?;
        self.users.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Resolves a named user registered earlier in the scenario.
    pub fn user(&self, name: &str) -> Result<UserId, eyre::Report> {
        self.users
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown user {name} in scenario world"))
    }

    /// Returns the scenario's todo item.
    pub fn todo(&self) -> Result<&TodoItem, eyre::Report> {
        self.todo
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing todo item in scenario world"))
    }
}

impl Default for TodoReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoReviewWorld {
    TodoReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
