use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::resolution::{Resolution, classify, conflict_content};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, MergeLabels};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use crate::commands::porcelain::commit::staged_snapshot;
use crate::errors::GitletError;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// How a merge ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other branch is already part of the current history
    AlreadyMerged,
    /// The current history was a prefix of the other branch
    FastForwarded,
    /// A merge commit was created
    Merged { commit: ObjectId, conflicted: bool },
}

impl Repository {
    pub async fn merge(&mut self, branch_name: &str) -> anyhow::Result<()> {
        match self.merge_branch(branch_name).await? {
            MergeOutcome::AlreadyMerged => {
                writeln!(
                    self.writer(),
                    "Given branch is an ancestor of the current branch."
                )?;
            }
            MergeOutcome::FastForwarded => {
                writeln!(self.writer(), "Current branch fast-forwarded.")?;
            }
            MergeOutcome::Merged { conflicted, .. } => {
                if conflicted {
                    writeln!(self.writer(), "Encountered a merge conflict.")?;
                }
            }
        }

        Ok(())
    }

    /// Merge the branch `branch_name` into the active branch
    ///
    /// Every precondition is checked before the working tree is touched.
    pub async fn merge_branch(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let other_branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| GitletError::BranchNotFound)?;
        let other_oid = self
            .refs()
            .read_branch(&other_branch)?
            .ok_or(GitletError::BranchNotFound)?;

        let active_branch = self.refs().active_branch()?;
        if active_branch == other_branch {
            return Err(GitletError::MergeWithItself.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        if !index.is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let (head_oid, head) = self.head_commit()?;
        if !Inspector::new(self.workspace())
            .untracked_files(&head)?
            .is_empty()
        {
            return Err(GitletError::UntrackedFileInTheWay.into());
        }

        let split_oid = SplitPointFinder::new(|oid| self.database().slim_commit(oid))
            .find_split_point(&head_oid, &other_oid)?
            .ok_or_else(|| {
                anyhow::anyhow!("{} and {} share no history", active_branch, other_branch)
            })?;

        if split_oid == other_oid {
            return Ok(MergeOutcome::AlreadyMerged);
        }

        let other = self.database().load_commit(&other_oid)?;

        if split_oid == head_oid {
            Migration::new(self, &head, &other).apply_changes()?;
            self.refs().set_active_branch(&other_branch)?;
            index.clear();
            index.write_updates()?;

            return Ok(MergeOutcome::FastForwarded);
        }

        let split = self.database().load_commit(&split_oid)?;
        let conflicted = self.resolve_paths(&head, &other, &split, &mut index)?;

        let commit = Commit::new(
            vec![head_oid, other_oid],
            staged_snapshot(&head, &index),
            self.settings().commit_timestamp(),
            format!("Merged {} into {}.", other_branch, active_branch),
        )
        .with_merge_labels(MergeLabels::new(
            active_branch.to_string(),
            other_branch.to_string(),
        ));

        let commit_oid = self.database().store_commit(&commit)?;
        self.refs().update_head(&commit_oid)?;

        index.clear();
        index.write_updates()?;

        tracing::debug!(commit = %commit_oid, conflicted, "created merge commit");

        Ok(MergeOutcome::Merged {
            commit: commit_oid,
            conflicted,
        })
    }

    /// Apply the three-way decision for every path, returning whether any path conflicted
    fn resolve_paths(
        &self,
        head: &Commit,
        other: &Commit,
        split: &Commit,
        index: &mut Index,
    ) -> anyhow::Result<bool> {
        let paths = split
            .files()
            .keys()
            .chain(head.files().keys())
            .chain(other.files().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut conflicted = false;

        for path in paths {
            let resolution = classify(
                head.blob_for(&path),
                other.blob_for(&path),
                split.blob_for(&path),
            );
            tracing::debug!(path = %path.display(), ?resolution, "classified path");

            match resolution {
                Resolution::KeepHead => {}
                Resolution::TakeOther(oid) => {
                    let content = self.database().load_blob(&oid)?;
                    self.workspace().write_file(&path, &content)?;
                    index.stage_add(path, oid);
                }
                Resolution::Delete(oid) => {
                    self.workspace().remove_file(&path)?;
                    index.stage_remove(path, oid);
                }
                Resolution::Conflict {
                    head: head_oid,
                    other: other_oid,
                } => {
                    let content = conflict_content(
                        self.load_side(head_oid.as_ref())?.as_deref(),
                        self.load_side(other_oid.as_ref())?.as_deref(),
                    );
                    self.write_conflict(&path, content, index)?;
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }

    fn load_side(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        oid.map(|oid| self.database().load_blob(oid)).transpose()
    }

    fn write_conflict(&self, path: &Path, content: Vec<u8>, index: &mut Index) -> anyhow::Result<()> {
        let blob = Blob::new(path.to_path_buf(), Bytes::from(content));
        let blob_oid = self.database().store_blob(&blob)?;

        self.workspace().write_file(path, blob.content())?;
        index.stage_add(path.to_path_buf(), blob_oid);

        Ok(())
    }
}
