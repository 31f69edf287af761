//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use steward::org::{
    adapters::memory::InMemoryUserDirectory,
    domain::{UserId, UserRecord},
};
use steward::todo::{
    adapters::memory::{InMemoryNotificationSink, InMemoryTodoRepository},
    domain::{ActionType, OrgId, SourceType, TodoItem},
    services::{CreateTodoRequest, WorkflowService},
};

/// Workflow service wired to in-memory adapters.
pub type TestWorkflowService = WorkflowService<
    InMemoryTodoRepository,
    InMemoryUserDirectory,
    InMemoryNotificationSink,
    DefaultClock,
>;

/// A seeded environment: Ava delegates work to Ben, who reports to Mara.
pub struct Env {
    pub service: TestWorkflowService,
    pub directory: InMemoryUserDirectory,
    pub sink: InMemoryNotificationSink,
    pub organization: OrgId,
    pub ava: UserId,
    pub ben: UserId,
    pub mara: UserId,
}

impl Env {
    /// A create request from Ava assigning work to Ben.
    #[must_use]
    pub fn delegated_request(&self) -> CreateTodoRequest {
        CreateTodoRequest::new(
            self.organization,
            self.ben,
            "Quarterly report",
            SourceType::ProjectTask,
            ActionType::Do,
        )
    }

    /// Creates a delegated item owned by Ben, created by Ava.
    pub async fn create_delegated(&self) -> TodoItem {
        self.service
            .create(self.ava, self.delegated_request())
            .await
            .expect("create delegated todo")
    }
}

/// Provides a freshly seeded environment for each test.
#[fixture]
pub fn env() -> Env {
    let directory = InMemoryUserDirectory::new();
    let mara = UserId::new();
    let ben = UserId::new();
    let ava = UserId::new();
    directory
        .upsert(UserRecord::new(mara, "Mara"))
        .expect("seed Mara");
    directory
        .upsert(UserRecord::new(ben, "Ben").with_manager(mara))
        .expect("seed Ben");
    directory
        .upsert(UserRecord::new(ava, "Ava"))
        .expect("seed Ava");

    let sink = InMemoryNotificationSink::new();
    let service = WorkflowService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(directory.clone()),
        Arc::new(sink.clone()),
        Arc::new(DefaultClock),
    );

    Env {
        service,
        directory,
        sink,
        organization: OrgId::new(),
        ava,
        ben,
        mara,
    }
}
