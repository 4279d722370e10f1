//! Three-way merge building blocks
//!
//! - `split_point`: nearest common ancestor search over the commit graph
//! - `resolution`: per-path decisions and conflict file synthesis

pub mod resolution;
pub mod split_point;
