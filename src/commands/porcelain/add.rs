use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::errors::GitletError;

impl Repository {
    pub async fn add(&mut self, file: &str) -> anyhow::Result<()> {
        let path = Workspace::normalize(file)?;
        if !self.workspace().exists(&path) {
            return Err(GitletError::FileNotFound.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the staging area from the disk
        index.rehydrate()?;

        let (_, head) = self.head_commit()?;
        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;

        // a file back to its committed version has nothing left to stage
        if head.blob_for(&path) == Some(&blob_id) {
            index.unstage_add(&path);
        } else {
            self.database().store_blob(&blob)?;
            index.stage_add(path.clone(), blob_id);
        }
        index.unstage_remove(&path);

        if index.has_changed() {
            index.write_updates()?;
        }

        Ok(())
    }
}
