//! Orchestration services for the todo module.

pub mod workflow;

pub use workflow::{
    CreateTodoRequest, ListStatusFilter, TeamTodoPage, WorkflowError, WorkflowErrorKind,
    WorkflowResult, WorkflowService,
};
