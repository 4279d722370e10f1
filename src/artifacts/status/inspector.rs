//! Comparisons between the working tree, the staging area and a commit

use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
}

impl Inspector<'_> {
    /// Blob ID the working file would be stored under, if the file exists
    pub fn working_blob_id(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !self.workspace.exists(path) {
            return Ok(None);
        }

        Ok(Some(self.workspace.parse_blob(path)?.object_id()?))
    }

    /// Working files the given commit does not track
    pub fn untracked_files(&self, head: &Commit) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|path| !head.tracks(path))
            .collect())
    }

    /// Working files untracked by `head` that switching to `target` would overwrite
    pub fn untracked_in_the_way(
        &self,
        head: &Commit,
        target: &Commit,
    ) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self
            .untracked_files(head)?
            .into_iter()
            .filter(|path| target.tracks(path))
            .collect())
    }

    /// Unstaged difference of one path, if any
    ///
    /// A path staged for addition is compared against its staged blob; otherwise a path tracked
    /// by `head` is compared against the committed blob, unless it is staged for removal.
    pub fn check_workspace_against_index(
        &self,
        path: &Path,
        head: &Commit,
        index: &Index,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        let expected = match index.staged_addition(path) {
            Some(staged) => staged,
            None if index.is_staged_for_removal(path) => return Ok(None),
            None => match head.blob_for(path) {
                Some(committed) => committed,
                None => return Ok(None),
            },
        };

        match self.working_blob_id(path)? {
            None => Ok(Some(WorkspaceChangeType::Deleted)),
            Some(working) if &working != expected => Ok(Some(WorkspaceChangeType::Modified)),
            Some(_) => Ok(None),
        }
    }
}
