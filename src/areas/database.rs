//! Object store
//!
//! Blobs and commits live in two namespaces under the metadata directory:
//!
//! - `blobs/<xx>/<yyyy...>`: raw file content
//! - `commits/<xx>/<yyyy...>`: serialized commits
//!
//! Objects are write-once: storing an object that already exists is a no-op, and nothing is
//! ever deleted.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    /// Repository metadata directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn namespace_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.namespace())
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object.object_path()?);

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::trace!(oid = %object_id, kind = %object.object_type(), "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn store_blob(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        self.store(blob)
    }

    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        self.store(commit)
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.namespace_path(object_type)
            .join(object_id.to_path())
            .exists()
    }

    /// Load the raw content of a blob
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        self.read_object(ObjectType::Blob, object_id)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_content = self.read_object(ObjectType::Commit, object_id)?;
        let mut object_reader = Cursor::new(object_content);

        match ObjectType::parse_object_type(&mut object_reader)? {
            ObjectType::Commit => Commit::deserialize(object_reader)
                .with_context(|| format!("Corrupt commit object {}", object_id)),
            other => anyhow::bail!("object {} is a {}, not a commit", object_id, other),
        }
    }

    /// Parents of a commit, as needed by graph searches
    pub fn slim_commit(&self, object_id: &ObjectId) -> anyhow::Result<SlimCommit> {
        Ok(self.load_commit(object_id)?.to_slim(object_id.clone()))
    }

    fn read_object(&self, object_type: ObjectType, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.namespace_path(object_type).join(object_id.to_path());

        if !object_path.exists() {
            return Err(GitletError::ObjectNotFound(object_id.to_string()).into());
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// All stored commit IDs, sorted
    pub fn list_commits(&self) -> anyhow::Result<Vec<ObjectId>> {
        let commits_path = self.namespace_path(ObjectType::Commit);
        if !commits_path.exists() {
            return Ok(Vec::new());
        }

        let mut oids = WalkDir::new(&commits_path)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let dir_name = entry.path().parent()?.file_name()?.to_string_lossy();
                let file_name = entry.file_name().to_string_lossy();
                ObjectId::try_parse(format!("{}{}", dir_name, file_name)).ok()
            })
            .collect::<Vec<_>>();
        oids.sort();

        Ok(oids)
    }

    /// Find all commits whose ID starts with the given prefix.
    ///
    /// Used to resolve abbreviated commit IDs to their full form.
    ///
    /// # Returns
    ///
    /// All matching IDs, sorted. An empty vector means no match; more than one means the
    /// prefix is ambiguous.
    ///
    /// # Performance
    ///
    /// - For prefixes of 2+ characters, only searches the specific directory
    /// - For shorter prefixes, all directories are searched
    pub fn find_commits_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();

        if prefix.len() < 2 {
            return Ok(self
                .list_commits()?
                .into_iter()
                .filter(|oid| oid.as_ref().starts_with(&prefix))
                .collect());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.namespace_path(ObjectType::Commit).join(dir_name);
        let mut matches = Vec::new();

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let file_name = entry.file_name();
                let file_name_str = file_name.to_string_lossy();

                if file_name_str.starts_with(file_prefix)
                    && let Ok(oid) = ObjectId::try_parse(format!("{}{}", dir_name, file_name_str))
                {
                    matches.push(oid);
                }
            }
        }
        matches.sort();

        Ok(matches)
    }
}
