//! Domain model for the organisational hierarchy.
//!
//! The org domain models user records and the reporting forest built from
//! their `manager` links while keeping directory infrastructure outside of
//! the domain boundary.

mod ids;
mod tree;
mod user;

pub use ids::UserId;
pub use tree::{OrgNode, build_org_tree};
pub use user::UserRecord;
