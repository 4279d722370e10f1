//! Split point finder for three-way merges
//!
//! The split point of two commits is their nearest common ancestor, used as the reference
//! version of every file during a merge.
//!
//! ## Algorithm Overview
//!
//! ### Phase 1: Mark Histories
//!
//! Walk the full history (first and second parents) of each input commit and tag every commit
//! reached with the side it was reached from. Commits tagged from both sides are the common
//! ancestors.
//!
//! ### Phase 2: Breadth-First Search From Head
//!
//! Starting at the head commit, visit commits in breadth-first order, expanding the first
//! parent before the second. The first visited commit that is a common ancestor is the split
//! point. Each commit is visited once, so the answer only depends on the shape of the graph.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitPointFinder::new(|oid| database.slim_commit(oid));
//! let split_point = finder.find_split_point(&head_oid, &other_oid)?;
//! ```

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const REACHED_FROM_HEAD = 0b01;
        const REACHED_FROM_OTHER = 0b10;
        const COMMON = Self::REACHED_FROM_HEAD.bits() | Self::REACHED_FROM_OTHER.bits();
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::REACHED_FROM_HEAD) {
            flags.push("HEAD");
        }
        if self.contains(VisitState::REACHED_FROM_OTHER) {
            flags.push("OTHER");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Finds the split point between two commits
///
/// Takes a function that loads the parents of any commit, so the same search runs against the
/// object store or an in-memory graph.
pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Every commit reachable from `start` through first and second parents, `start` included
    pub fn history(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut reached = HashSet::new();
        let mut pending = vec![start.clone()];

        while let Some(oid) = pending.pop() {
            if !reached.insert(oid.clone()) {
                continue;
            }

            let commit = (self.commit_loader)(&oid)?;
            pending.extend(
                commit
                    .parents
                    .into_iter()
                    .filter(|parent| !reached.contains(parent)),
            );
        }

        Ok(reached)
    }

    fn mark_history(
        &self,
        start: &ObjectId,
        side: VisitState,
        states: &mut HashMap<ObjectId, VisitState>,
    ) -> anyhow::Result<()> {
        for oid in self.history(start)? {
            states
                .entry(oid)
                .and_modify(|state| *state |= side)
                .or_insert(side);
        }

        Ok(())
    }

    /// Nearest common ancestor of `head` and `other`, as seen from `head`
    ///
    /// # Returns
    ///
    /// `None` only when the two commits share no history at all.
    pub fn find_split_point(
        &self,
        head: &ObjectId,
        other: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = HashMap::new();
        self.mark_history(head, VisitState::REACHED_FROM_HEAD, &mut states)?;
        self.mark_history(other, VisitState::REACHED_FROM_OTHER, &mut states)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([head.clone()]);

        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            let state = states.get(&oid).copied().unwrap_or(VisitState::NONE);
            tracing::trace!(commit = %oid.to_short_oid(), ?state, "visiting commit");

            if state.contains(VisitState::COMMON) {
                tracing::debug!(
                    head = %head.to_short_oid(),
                    other = %other.to_short_oid(),
                    split_point = %oid.to_short_oid(),
                    "found split point"
                );
                return Ok(Some(oid));
            }

            let commit = (self.commit_loader)(&oid)?;
            queue.extend(
                commit
                    .parents
                    .into_iter()
                    .filter(|parent| !visited.contains(parent)),
            );
        }

        Ok(None)
    }
}
