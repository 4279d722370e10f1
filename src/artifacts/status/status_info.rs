use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

/// Everything the `status` command reports, each collection sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) active_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn initialize(&self, index: &Index, head: &Commit) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository.workspace());
        let working_files = self.repository.workspace().list_files()?;

        // every path that could have an unstaged change
        let candidates = head
            .files()
            .keys()
            .chain(index.additions().keys())
            .chain(working_files.iter())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut workspace_changeset = ChangeSet::new();
        for path in candidates {
            if let Some(change) = inspector.check_workspace_against_index(&path, head, index)? {
                workspace_changeset.insert(path, change);
            }
        }

        // files staged for removal and re-created are untracked again
        let untracked_files = working_files
            .into_iter()
            .filter(|path| index.staged_addition(path).is_none())
            .filter(|path| !head.tracks(path) || index.is_staged_for_removal(path))
            .collect::<FileSet>();

        Ok(StatusInfo {
            active_branch: self.repository.refs().active_branch()?,
            branches: self.repository.refs().list_branches()?,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().keys().cloned().collect(),
            workspace_changeset,
            untracked_files,
        })
    }
}
