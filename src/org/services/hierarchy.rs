//! Reporting-chain resolution over the user graph.

use crate::org::{
    domain::{OrgNode, UserId, UserRecord, build_org_tree},
    ports::{DirectoryError, UserDirectory},
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Hard ceiling on manager-chain walks.
///
/// A corrupted cyclic chain must terminate at this depth instead of looping
/// or erroring; healthy reporting chains are far shorter.
pub const MAX_CHAIN_HOPS: usize = 20;

/// Service-level errors for hierarchy resolution.
#[derive(Debug, Error)]
pub enum OrgHierarchyError {
    /// The user is not present in the directory.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for hierarchy service operations.
pub type OrgHierarchyResult<T> = Result<T, OrgHierarchyError>;

/// Manager/subordinate resolution service.
#[derive(Clone)]
pub struct OrgHierarchyService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> OrgHierarchyService<D>
where
    D: UserDirectory,
{
    /// Creates a new hierarchy service.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Computes the reporting depth of a user.
    ///
    /// Depth 0 means the user has no manager. The walk keeps a visited set
    /// and stops at [`MAX_CHAIN_HOPS`], returning the depth reached, so a
    /// cyclic manager chain yields a finite result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`OrgHierarchyError::UnknownUser`] when the starting user
    /// does not exist, or [`OrgHierarchyError::Directory`] when a lookup
    /// fails.
    pub async fn reporting_depth(&self, user: UserId) -> OrgHierarchyResult<usize> {
        let record = self
            .directory
            .get(user)
            .await?
            .ok_or(OrgHierarchyError::UnknownUser(user))?;

        let mut visited: HashSet<UserId> = HashSet::new();
        visited.insert(record.id());

        let mut depth = 0;
        let mut next = record.manager();
        while let Some(manager_id) = next {
            if depth >= MAX_CHAIN_HOPS || !visited.insert(manager_id) {
                break;
            }
            let Some(manager) = self.directory.get(manager_id).await? else {
                // Dangling manager reference: the chain ends here.
                break;
            };
            depth += 1;
            next = manager.manager();
        }
        Ok(depth)
    }

    /// Returns `true` iff `candidate` is the direct manager of `subordinate`.
    ///
    /// An unknown subordinate has no manager, so the answer is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`OrgHierarchyError::Directory`] when the lookup fails.
    pub async fn is_direct_manager(
        &self,
        candidate: UserId,
        subordinate: UserId,
    ) -> OrgHierarchyResult<bool> {
        let record = self.directory.get(subordinate).await?;
        Ok(record.is_some_and(|user| user.manager() == Some(candidate)))
    }

    /// Returns the direct reports of a user, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`OrgHierarchyError::Directory`] when the lookup fails.
    pub async fn direct_reports(&self, user: UserId) -> OrgHierarchyResult<Vec<UserRecord>> {
        Ok(self.directory.direct_reports(user).await?)
    }

    /// Builds the full reporting forest for org-chart rendering.
    ///
    /// # Errors
    ///
    /// Returns [`OrgHierarchyError::Directory`] when the directory cannot be
    /// enumerated.
    pub async fn org_chart(&self) -> OrgHierarchyResult<Vec<OrgNode>> {
        let users = self.directory.all_users().await?;
        Ok(build_org_tree(&users))
    }
}
