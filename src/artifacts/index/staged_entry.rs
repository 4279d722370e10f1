//! Staged path record
//!
//! ## Entry Format
//!
//! ```text
//! oid         : 20 raw bytes
//! path length : u16, network byte order
//! path        : UTF-8 bytes, no terminator
//! ```

use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use byteorder::WriteBytesExt;
use bytes::Bytes;
use derive_new::new;
use std::io::Write;
use std::path::PathBuf;

/// Size of the binary object ID at the start of every entry
pub const ENTRY_OID_SIZE: usize = 20;

/// Size of the path length field
pub const ENTRY_PATH_LENGTH_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagedEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
}

impl Packable for StagedEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self
            .path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid staged path {:?}", self.path))?;
        let path_length = u16::try_from(path.len())
            .map_err(|_| anyhow::anyhow!("Staged path too long: {}", path))?;

        let mut entry_bytes = Vec::with_capacity(ENTRY_OID_SIZE + ENTRY_PATH_LENGTH_SIZE + path.len());
        self.oid.write_h40_to(&mut entry_bytes)?;
        entry_bytes.write_u16::<byteorder::NetworkEndian>(path_length)?;
        entry_bytes.write_all(path.as_bytes())?;

        Ok(Bytes::from(entry_bytes))
    }
}
