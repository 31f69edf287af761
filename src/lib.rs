//! Steward: work-tracking and approval engine.
//!
//! This crate provides the core of an internal work-tracking tool: a task
//! lifecycle state machine gated by organisational authority, with in-app
//! notification logging.
//!
//! # Architecture
//!
//! Steward follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory reference
//!   implementations ship with the crate)
//!
//! # Modules
//!
//! - [`org`]: Manager/subordinate resolution over the user graph
//! - [`todo`]: The task lifecycle and review engine

pub mod org;
pub mod todo;
