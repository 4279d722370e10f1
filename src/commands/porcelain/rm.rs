use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::GitletError;

impl Repository {
    pub async fn rm(&mut self, file: &str) -> anyhow::Result<()> {
        let path = Workspace::normalize(file)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the staging area from the disk
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;
        if index.staged_addition(&path).is_none() && !head.tracks(&path) {
            return Err(GitletError::NothingToRemove.into());
        }

        index.unstage_add(&path);

        if let Some(oid) = head.blob_for(&path) {
            index.stage_remove(path.clone(), oid.clone());
            self.workspace().remove_file(&path)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
