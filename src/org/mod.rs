//! Organisational hierarchy for Steward.
//!
//! This module answers manager/subordinate questions over the user graph:
//! reporting depth along the manager chain, direct-manager checks, and
//! org-chart forest construction. The underlying data does not structurally
//! forbid cycles, so every chain walk is iterative and bounded. The module
//! follows hexagonal architecture:
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
