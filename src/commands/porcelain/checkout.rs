use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::GitletError;

impl Repository {
    /// Switch the working tree and the active branch to `target`
    pub async fn checkout_branch(&mut self, target: &str) -> anyhow::Result<()> {
        let branch_name =
            BranchName::try_parse(target.to_string()).map_err(|_| GitletError::NoSuchBranch)?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or(GitletError::NoSuchBranch)?;

        if self.refs().is_active_branch(&branch_name)? {
            return Err(GitletError::AlreadyOnBranch.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let (_, head) = self.head_commit()?;
        let target_commit = self.database().load_commit(&target_oid)?;

        let mut migration = Migration::new(self, &head, &target_commit);
        migration.apply_changes()?;

        self.refs().set_active_branch(&branch_name)?;
        index.clear();
        index.write_updates()?;

        Ok(())
    }

    /// Restore one file from the head commit, or from the commit `revision` names
    ///
    /// The staging area is left untouched.
    pub fn checkout_file(&mut self, revision: Option<&str>, file: &str) -> anyhow::Result<()> {
        let path = Workspace::normalize(file)?;

        let commit = match revision {
            Some(revision) => {
                let commit_oid = Revision::new(revision).resolve(self.database())?;
                self.database().load_commit(&commit_oid)?
            }
            None => self.head_commit()?.1,
        };

        let blob_oid = commit
            .blob_for(&path)
            .ok_or(GitletError::FileNotInCommit)?;
        let content = self.database().load_blob(blob_oid)?;

        self.workspace().write_file(&path, &content)
    }
}
