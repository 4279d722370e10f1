//! Object types and operations
//!
//! Every piece of content is stored as an immutable object identified by a SHA-1 hash:
//!
//! - **Blob**: the raw bytes of one file at one point in time
//! - **Commit**: a snapshot (path to blob mapping) with message, timestamp and parents
//!
//! Blobs are stored verbatim. Commits are stored as text with a `commit <size>\0` header.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
