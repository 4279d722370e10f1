//! Working directory
//!
//! All paths handed to and returned from the workspace are relative to the repository root.
//! The metadata directory is never listed.

use crate::GITLET_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [GITLET_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file under the root, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(self.path.as_ref()) {
                Ok(relative_path) => !Self::is_ignored(relative_path),
                Err(_) => false,
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        // Check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    /// Path as typed on the command line, relative to the root
    ///
    /// `.` components are dropped, so `./a.txt` and `a.txt` name the same file. Paths that
    /// climb out of the root or are absolute are rejected, as are names with line breaks,
    /// which the commit format cannot hold.
    pub fn normalize(file_path: &str) -> anyhow::Result<PathBuf> {
        if file_path.contains(['\n', '\r']) {
            return Err(GitletError::UnsupportedFileName(file_path.to_string()).into());
        }

        Path::new(file_path)
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .map(|component| match component {
                Component::Normal(name) => Ok(name),
                _ => Err(anyhow::Error::from(GitletError::PathOutsideRepository(
                    file_path.to_string(),
                ))),
            })
            .collect()
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    /// Read a working file as a blob bound to its path
    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(file_path.to_path_buf(), self.read_file(file_path)?))
    }

    /// Write `content` to `file_path`, creating parent directories as needed
    ///
    /// A directory standing where the file should go is replaced.
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {:?}", file_path))?;
        }

        if full_path.is_dir() {
            std::fs::remove_dir_all(&full_path).with_context(|| {
                format!("Failed to remove existing directory: {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;
        tracing::trace!(path = %file_path.display(), bytes = content.len(), "wrote working file");

        Ok(())
    }

    /// Delete a working file if present, then prune directories left empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Ok(());
        }

        std::fs::remove_file(&full_path)
            .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        tracing::trace!(path = %file_path.display(), "removed working file");

        self.prune_empty_parent_dirs(&full_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
