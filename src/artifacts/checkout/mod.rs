//! Checkout operations and conflict handling
//!
//! Switching the working tree to another commit is shared by `checkout <branch>`, `reset` and
//! fast-forward merges. Conflicts are detected before any change to the working directory.

pub mod conflict;
pub mod migration;
