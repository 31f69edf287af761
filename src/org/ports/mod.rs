//! Port contracts for the org module.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, UserDirectory};
