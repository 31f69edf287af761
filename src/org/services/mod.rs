//! Orchestration services for the org module.

pub mod hierarchy;

pub use hierarchy::{
    MAX_CHAIN_HOPS, OrgHierarchyError, OrgHierarchyResult, OrgHierarchyService,
};
