//! Task lifecycle and review engine for Steward.
//!
//! A todo item moves from creation to completion through a fixed state
//! machine gated by organisational authority: the assignee performs the
//! work, the creator reviews it, and the assignee's direct manager is kept
//! informed. Transitions are validated against a declarative table and
//! persisted with an optimistic status check so that racing actors cannot
//! corrupt an item. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
