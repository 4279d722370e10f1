use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Files tracked by `head` with the staged additions and removals applied
pub fn staged_snapshot(head: &Commit, index: &Index) -> BTreeMap<PathBuf, ObjectId> {
    let mut files = head.files().clone();

    files.extend(
        index
            .additions()
            .iter()
            .map(|(path, oid)| (path.clone(), oid.clone())),
    );
    for path in index.removals().keys() {
        files.remove(path);
    }

    files
}

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.trim().is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the staging area from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        let (head_oid, head) = self.head_commit()?;
        let commit = Commit::new(
            vec![head_oid],
            staged_snapshot(&head, &index),
            self.settings().commit_timestamp(),
            message.to_string(),
        );

        let commit_id = self.database().store_commit(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        tracing::debug!(commit = %commit_id, files = commit.files().len(), "created commit");

        Ok(())
    }
}
