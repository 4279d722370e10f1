//! Working tree migration between two commits
//!
//! Switching the working tree from one commit to another involves:
//!
//! 1. Detecting untracked working files the target would overwrite
//! 2. Planning file system operations (create, modify, delete)
//! 3. Applying them to the workspace
//!
//! ## Safety
//!
//! All operations are planned before execution, so a conflict aborts the migration before any
//! file is touched. The staging area is left to the caller.

use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::ConflictType;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::GitletError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Rewrite a file both commits track
    Modify,
}

/// Set of planned actions grouped by type
pub type ActionsSet = BTreeMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

/// Set of detected conflicts grouped by type
pub type ConflictsSet = BTreeMap<ConflictType, Vec<PathBuf>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    /// Commit the working tree currently reflects
    from: &'r Commit,
    /// Commit the working tree should reflect
    to: &'r Commit,
    actions: ActionsSet,
    conflicts: ConflictsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, from: &'r Commit, to: &'r Commit) -> Self {
        Self {
            repository,
            from,
            to,
            actions: BTreeMap::new(),
            conflicts: BTreeMap::new(),
        }
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.update_workspace()?;

        Ok(())
    }

    fn plan_changes(&mut self) -> anyhow::Result<()> {
        self.actions.clear();
        self.conflicts.clear();

        let inspector = Inspector::new(self.repository.workspace());
        let in_the_way = inspector.untracked_in_the_way(self.from, self.to)?;
        if !in_the_way.is_empty() {
            self.conflicts
                .insert(ConflictType::UntrackedOverwritten, in_the_way);
        }

        if let Some((conflict_type, paths)) = self.conflicts.iter().next() {
            tracing::debug!(?conflict_type, ?paths, "checkout aborted");
            return Err(GitletError::from(conflict_type).into());
        }

        for (path, oid) in self.to.files() {
            let action = match self.from.tracks(path) {
                true => ActionType::Modify,
                false => ActionType::Add,
            };
            self.record_change(action, path.clone(), Some(oid.clone()));
        }

        for path in self.from.files().keys() {
            if !self.to.tracks(path) {
                self.record_change(ActionType::Delete, path.clone(), None);
            }
        }

        Ok(())
    }

    fn record_change(&mut self, action: ActionType, path: PathBuf, oid: Option<ObjectId>) {
        self.actions.entry(action).or_default().push((path, oid));
    }

    // deletions first so a file can replace a directory emptied by the same migration
    fn update_workspace(&self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let database = self.repository.database();

        for action in [ActionType::Delete, ActionType::Modify, ActionType::Add] {
            for (path, oid) in self.actions.get(&action).into_iter().flatten() {
                match (action, oid) {
                    (ActionType::Delete, _) => workspace.remove_file(path)?,
                    (ActionType::Add | ActionType::Modify, Some(oid)) => {
                        workspace.write_file(path, &database.load_blob(oid)?)?
                    }
                    (_, None) => anyhow::bail!("Entry must be provided for Add and Modify actions"),
                }
            }
        }

        tracing::debug!(
            written = self.to.files().len(),
            deleted = self.actions.get(&ActionType::Delete).map_or(0, Vec::len),
            "migrated working tree"
        );

        Ok(())
    }
}
