use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use std::fs;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        for object_type in [ObjectType::Commit, ObjectType::Blob] {
            fs::create_dir_all(self.database().namespace_path(object_type)).with_context(|| {
                format!("Failed to create .gitlet/{} directory", object_type.namespace())
            })?;
        }

        fs::create_dir_all(self.refs().branches_path())
            .context("Failed to create .gitlet/branches directory")?;

        let root_oid = self.database().store_commit(&Commit::root())?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .create_branch(&default_branch, &root_oid)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_active_branch(&default_branch)
            .context("Failed to set the active branch")?;

        let index = self.index();
        let mut index = index.lock().await;
        index.clear();
        index.write_updates()?;

        tracing::debug!(path = %self.path().display(), root = %root_oid, "initialized repository");

        Ok(())
    }
}
