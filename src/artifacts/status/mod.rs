//! Working tree status inspection
//!
//! Compares the working directory against the staging area and the head commit.
//!
//! ## Components
//!
//! - `file_change`: categories of unstaged changes
//! - `inspector`: comparisons shared with checkout and merge
//! - `status_info`: aggregation of everything `status` reports

pub mod file_change;
pub mod inspector;
pub mod status_info;
