//! Commit object
//!
//! Commits are snapshots of the tracked files at a point in time. They contain:
//! - Parent commit ID(s) (none for the root, two for merges)
//! - A timestamp with its UTC offset
//! - The names of the merged branches (merge commits only, informational)
//! - The mapping from tracked path to blob ID
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! timestamp <unix-seconds> <timezone>
//! merged <active-branch> <other-branch>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Message of the commit every repository starts with
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Slim representation of a commit
///
/// Contains only what graph searches need.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct SlimCommit {
    /// The commit's object ID
    pub oid: ObjectId,
    /// First parent followed by the second parent, if any
    pub parents: Vec<ObjectId>,
}

/// Branch names recorded on a merge commit
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct MergeLabels {
    pub active: String,
    pub other: String,
}

/// Snapshot of the tracked files with history metadata
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit, two for merge commits)
    parents: Vec<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    merge_labels: Option<MergeLabels>,
    /// Tracked path to blob ID
    files: BTreeMap<PathBuf, ObjectId>,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        files: BTreeMap<PathBuf, ObjectId>,
        timestamp: DateTime<FixedOffset>,
        message: String,
    ) -> Self {
        Commit {
            parents,
            timestamp,
            merge_labels: None,
            files,
            message,
        }
    }

    /// The commit every repository starts with
    ///
    /// Pinned to the Unix epoch with no files, so its ID is the same everywhere.
    pub fn root() -> Self {
        Self::new(
            Vec::new(),
            BTreeMap::new(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    pub fn with_merge_labels(mut self, labels: MergeLabels) -> Self {
        self.merge_labels = Some(labels);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.files
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit::new(oid, self.parents.clone())
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        if let Some(labels) = &self.merge_labels {
            lines.push(format!("merged {} {}", labels.active, labels.other));
        }
        for (path, oid) in &self.files {
            lines.push(format!("file {} {}", oid.as_ref(), path.display()));
        }

        lines
    }

    fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, timezone) = value
            .split_once(' ')
            .context("Invalid commit object: invalid timestamp line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: invalid timestamp")?;

        let offset = *DateTime::parse_from_str(
            &format!("1970-01-01 00:00:00 {}", timezone),
            "%Y-%m-%d %H:%M:%S %z",
        )
        .context("Invalid commit object: invalid timezone")?
        .offset();
        let utc = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;

        Ok(utc.with_timezone(&offset))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        // every `file` line must parse back to the same path
        if let Some(path) = self
            .files
            .keys()
            .find(|path| path.to_str().is_none_or(|path| path.contains(['\n', '\r'])))
        {
            anyhow::bail!("Path {:?} cannot be recorded in a commit", path);
        }

        let object_content = format!("{}\n\n{}", self.header_lines().join("\n"), self.message);

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), object_content.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(object_content.as_bytes())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the `commit <size>\0` header has already been consumed
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut merge_labels = None;
        let mut files = BTreeMap::new();

        for line in header.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {:?}", line))?;

            match key {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "timestamp" => timestamp = Some(Self::parse_timestamp(value)?),
                "merged" => {
                    let (active, other) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid merged line")?;
                    merge_labels = Some(MergeLabels::new(active.to_string(), other.to_string()));
                }
                "file" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid file line")?;
                    files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown field {}", key),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing timestamp line")?;

        Ok(Commit {
            parents,
            timestamp,
            merge_labels,
            files,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
