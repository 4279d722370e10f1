//! User-facing commands
//!
//! Each command is an `impl Repository` block. Commands that touch the staging area are `async`
//! and hold its lock for their whole duration.
//!
//! ## Commands
//!
//! - `init`: Create the metadata directory, the root commit and `master`
//! - `add` / `rm`: Stage a file for addition or removal
//! - `commit`: Snapshot the staging area
//! - `log` / `global-log` / `find`: Inspect history
//! - `status`: Branches, staged changes and working tree changes
//! - `branch` / `rm-branch`: Manage branch pointers
//! - `checkout` / `reset`: Restore files or switch the working tree
//! - `merge`: Three-way merge of another branch into the active one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
