//! Staging area
//!
//! The staging area records what the next commit will change relative to the head commit:
//!
//! - `additions`: paths whose working content has been stored and should be tracked
//! - `removals`: paths tracked by the head that should stop being tracked
//!
//! Both maps are keyed by path relative to the repository root and kept sorted. The removal
//! value is the blob ID of the head's version of the file.
//!
//! The whole area is persisted on every change (read-modify-write) and verified with a SHA-1
//! trailer when read back.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::staged_entry::{
    ENTRY_OID_SIZE, ENTRY_PATH_LENGTH_SIZE, StagedEntry,
};
use crate::artifacts::index::staging_header::StagingHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::ByteOrder;
use fake::rand;
use std::collections::BTreeMap;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the staging file (typically `.gitlet/staging`)
    path: Box<Path>,
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeMap<PathBuf, ObjectId>,
    /// Flag indicating if the staging area has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.removals
    }

    pub fn staged_addition(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removals.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn stage_add(&mut self, path: PathBuf, oid: ObjectId) {
        tracing::trace!(path = %path.display(), %oid, "staging addition");
        self.additions.insert(path, oid);
        self.changed = true;
    }

    pub fn unstage_add(&mut self, path: &Path) {
        if self.additions.remove(path).is_some() {
            self.changed = true;
        }
    }

    pub fn stage_remove(&mut self, path: PathBuf, oid: ObjectId) {
        tracing::trace!(path = %path.display(), %oid, "staging removal");
        self.removals.insert(path, oid);
        self.changed = true;
    }

    pub fn unstage_remove(&mut self, path: &Path) {
        if self.removals.remove(path).is_some() {
            self.changed = true;
        }
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.changed = true;
        }
        self.additions.clear();
        self.removals.clear();
    }

    /// Load the staging area from disk
    ///
    /// A missing or empty file is an empty staging area.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the staging file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut staging_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open staging file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut staging_file, file_guard::Lock::Shared, 0, 1)?;

        // if the staging file is empty, return early
        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header = Self::parse_header(&mut reader)?;

        for _ in 0..header.additions_count {
            let entry = Self::parse_entry(&mut reader)?;
            self.additions.insert(entry.path, entry.oid);
        }
        for _ in 0..header.removals_count {
            let entry = Self::parse_entry(&mut reader)?;
            self.removals.insert(entry.path, entry.oid);
        }

        reader.verify().context("Staging area is corrupt")?;
        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "loaded staging area"
        );

        Ok(())
    }

    fn parse_header(reader: &mut Checksum) -> anyhow::Result<StagingHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = StagingHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        header.validate()?;

        Ok(header)
    }

    fn parse_entry(reader: &mut Checksum) -> anyhow::Result<StagedEntry> {
        let oid_bytes = reader.read(ENTRY_OID_SIZE)?;
        let oid = ObjectId::read_h40_from(&mut &oid_bytes[..])?;

        let length_bytes = reader.read(ENTRY_PATH_LENGTH_SIZE)?;
        let path_length = byteorder::NetworkEndian::read_u16(&length_bytes) as usize;

        let path_bytes = reader.read(path_length)?;
        let path = std::str::from_utf8(&path_bytes)
            .map_err(|_| anyhow!("Invalid UTF-8 in staged path"))?;

        Ok(StagedEntry::new(PathBuf::from(path), oid))
    }

    /// Persist the staging area
    ///
    /// The new content goes to a temporary file next to the staging file, which then replaces
    /// it by rename. Readers see either the old or the new staging area.
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the temporary file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let temp_path = self.temp_path()?;

        if let Err(error) = self.write_to(&temp_path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(error);
        }

        std::fs::rename(&temp_path, self.path()).with_context(|| {
            format!("Unable to replace staging file {}", self.path.display())
        })?;

        self.changed = false;
        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "wrote staging area"
        );

        Ok(())
    }

    fn temp_path(&self) -> anyhow::Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .with_context(|| format!("Invalid staging file path {}", self.path.display()))?;

        Ok(self.path.with_file_name(format!(
            "{}.tmp-{}",
            file_name.to_string_lossy(),
            rand::random::<u32>()
        )))
    }

    fn write_to(&self, temp_path: &Path) -> anyhow::Result<()> {
        let mut staging_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_path)
            .with_context(|| format!("Unable to open staging file {}", temp_path.display()))?;
        let lock = file_guard::lock(&mut staging_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = StagingHeader::with_counts(self.additions.len(), self.removals.len());
        writer.write(&header.serialize()?)?;

        for (path, oid) in self.additions.iter().chain(self.removals.iter()) {
            let entry = StagedEntry::new(path.clone(), oid.clone());
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()
    }
}
