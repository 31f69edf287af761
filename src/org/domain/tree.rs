//! Org-chart forest construction.

use super::{UserId, UserRecord};
use std::collections::{HashMap, HashSet, VecDeque};

/// A node in the rendered org chart.
///
/// Children are users whose `manager` link points at this node's user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgNode {
    /// The user at this position in the forest.
    pub user: UserRecord,
    /// Reporting depth below the root (roots are level 0).
    pub level: usize,
    /// Direct reports, in directory order.
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    /// Creates a childless node at the given level.
    #[must_use]
    pub const fn leaf(user: UserRecord, level: usize) -> Self {
        Self {
            user,
            level,
            children: Vec::new(),
        }
    }
}

/// Frame for the iterative depth-first forest assembly.
struct Frame {
    node: OrgNode,
    pending: VecDeque<UserId>,
}

impl Frame {
    fn new(user: UserRecord, level: usize, children_of: &HashMap<UserId, Vec<UserId>>) -> Self {
        let pending = children_of
            .get(&user.id())
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default();
        Self {
            node: OrgNode::leaf(user, level),
            pending,
        }
    }
}

/// Builds the reporting forest for the given users.
///
/// Roots are users with no manager or a manager outside the given slice.
/// The walk is iterative and each user is expanded at most once, so the
/// function terminates even when the manager links contain a cycle; cycle
/// members unreachable from any root are omitted from the output.
#[must_use]
pub fn build_org_tree(users: &[UserRecord]) -> Vec<OrgNode> {
    let by_id: HashMap<UserId, &UserRecord> = users.iter().map(|user| (user.id(), user)).collect();

    let mut children_of: HashMap<UserId, Vec<UserId>> = HashMap::new();
    for user in users {
        if let Some(manager) = user.manager() {
            if by_id.contains_key(&manager) {
                children_of.entry(manager).or_default().push(user.id());
            }
        }
    }

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut forest = Vec::new();
    for user in users {
        let is_root = user
            .manager()
            .is_none_or(|manager| !by_id.contains_key(&manager));
        if is_root && visited.insert(user.id()) {
            forest.push(expand_root(user, &by_id, &children_of, &mut visited));
        }
    }
    forest
}

/// Assembles one root's subtree with an explicit stack.
fn expand_root(
    root: &UserRecord,
    by_id: &HashMap<UserId, &UserRecord>,
    children_of: &HashMap<UserId, Vec<UserId>>,
    visited: &mut HashSet<UserId>,
) -> OrgNode {
    let mut stack = vec![Frame::new(root.clone(), 0, children_of)];
    let mut completed = None;

    while let Some(mut frame) = stack.pop() {
        if let Some(child_id) = frame.pending.pop_front() {
            let child_level = frame.node.level + 1;
            stack.push(frame);
            // A child already expanded elsewhere marks a corrupted graph;
            // skip it rather than duplicating the subtree.
            if visited.insert(child_id) {
                if let Some(child) = by_id.get(&child_id) {
                    stack.push(Frame::new((*child).clone(), child_level, children_of));
                }
            }
        } else if let Some(parent) = stack.last_mut() {
            parent.node.children.push(frame.node);
        } else {
            completed = Some(frame.node);
        }
    }

    completed.unwrap_or_else(|| OrgNode::leaf(root.clone(), 0))
}
