use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;

impl Repository {
    /// Check out an arbitrary commit and move the active branch to it
    pub async fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let target_oid = Revision::new(revision).resolve(self.database())?;
        let target_commit = self.database().load_commit(&target_oid)?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let (_, head) = self.head_commit()?;

        let mut migration = Migration::new(self, &head, &target_commit);
        migration.apply_changes()?;

        self.refs().update_head(&target_oid)?;
        index.clear();
        index.write_updates()?;

        Ok(())
    }
}
