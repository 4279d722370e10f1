//! A tiny local version-control system
//!
//! The crate is split the same way the command line tool is layered:
//!
//! - `areas`: on-disk areas of a repository (object store, staging area, branches, working tree)
//! - `artifacts`: data structures and algorithms built on top of the areas
//! - `commands`: the user-facing commands, implemented on `Repository`
//! - `errors`: user-visible failures

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the directory holding all repository metadata
pub const GITLET_DIR: &str = ".gitlet";
