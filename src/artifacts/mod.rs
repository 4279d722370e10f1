//! Data structures and algorithms built on top of the repository areas
//!
//! - `branch`: Branch names and commit ID resolution
//! - `checkout`: Working tree migration and conflict detection
//! - `core`: Settings and the pager writer
//! - `index`: Staging file format
//! - `log`: Commit history traversal
//! - `merge`: Split point search and per-path merge decisions
//! - `objects`: Object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
