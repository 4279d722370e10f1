//! On-disk areas of a repository
//!
//! - `database`: content-addressed store for blobs and commits
//! - `index`: staging area of pending additions and removals
//! - `refs`: branch table and the active branch
//! - `repository`: handle owning every area, passed to each command
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
