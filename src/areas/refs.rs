//! Branch table
//!
//! Branches are named mutable pointers into the commit graph. Exactly one of them is active: the
//! next commit extends it.
//!
//! ## File Format
//!
//! - `branches/<name>`: the 40-character ID of the branch tip. Names containing `/` are stored
//!   in nested directories.
//! - `active-branch`: the name of the active branch.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Branches directory name under the metadata directory
pub const BRANCHES_DIR: &str = "branches";

/// Active branch file name under the metadata directory
pub const ACTIVE_BRANCH_FILE: &str = "active-branch";

#[derive(Debug)]
pub struct Refs {
    /// Path to the metadata directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_DIR).into_boxed_path()
    }

    pub fn active_branch_path(&self) -> Box<Path> {
        self.path.join(ACTIVE_BRANCH_FILE).into_boxed_path()
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.branches_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Create a branch pointing at `oid`
    ///
    /// Fails if a branch with the same name already exists.
    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(GitletError::BranchAlreadyExists.into());
        }

        self.update_ref_file(self.branch_path(name), oid.as_ref())?;
        tracing::debug!(branch = %name, %oid, "created branch");

        Ok(())
    }

    /// Delete a branch pointer, returning the commit it pointed at
    ///
    /// The commits themselves are untouched.
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(name);

        let oid = self
            .read_branch(name)?
            .ok_or(GitletError::BranchNotFound)?;
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        tracing::debug!(branch = %name, %oid, "deleted branch");

        Ok(oid)
    }

    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = self.read_ref_file(&branch_path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string()).with_context(
            || format!("branch {} holds an invalid commit id", name),
        )?))
    }

    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(name), oid.as_ref())?;
        tracing::debug!(branch = %name, %oid, "moved branch");

        Ok(())
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let branches_path = self.branches_path();

        let mut branches = WalkDir::new(&branches_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry.path().strip_prefix(&branches_path)?;
                BranchName::try_parse(relative_path.to_string_lossy().to_string())
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        branches.sort();

        Ok(branches)
    }

    pub fn active_branch(&self) -> anyhow::Result<BranchName> {
        let content = self.read_ref_file(&self.active_branch_path())?;

        BranchName::try_parse(content.trim().to_string())
            .context("active branch file holds an invalid branch name")
    }

    pub fn set_active_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(self.active_branch_path(), name.as_ref())?;
        tracing::debug!(branch = %name, "switched active branch");

        Ok(())
    }

    pub fn is_active_branch(&self, name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.active_branch()? == name)
    }

    /// Tip of the active branch
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let active_branch = self.active_branch()?;

        self.read_branch(&active_branch)?
            .with_context(|| format!("active branch {} does not exist", active_branch))
    }

    /// Move the active branch to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_branch(&self.active_branch()?, oid)
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<String> {
        let mut ref_file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;

        Ok(content)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.branches_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
