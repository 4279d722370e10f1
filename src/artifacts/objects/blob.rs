//! Blob object
//!
//! Blobs store file content. On disk they are the raw bytes of the file, nothing else.
//!
//! ## Identity
//!
//! A blob's ID is not the hash of its content alone: it is the hash of the content hash
//! followed by the hash of the path the content was read from. Identical content tracked under
//! two different paths therefore produces two different blobs.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};

/// File content bound to the path it is tracked under
#[derive(Debug, Clone, new)]
pub struct Blob {
    /// Path relative to the repository root
    path: PathBuf,
    /// Raw file content
    content: Bytes,
}

impl Blob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        let content_oid = ObjectId::hash(&self.content);
        let path_oid = ObjectId::hash(self.path.to_string_lossy().as_bytes());

        Ok(ObjectId::hash(
            format!("{}{}", content_oid, path_oid).as_bytes(),
        ))
    }
}
