//! Command implementations
//!
//! - `porcelain`: the user-facing commands of the `gitlet` binary

pub mod porcelain;
