use std::fmt;

/// How a working file differs from what the next commit would record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceChangeType::Modified => write!(f, "modified"),
            WorkspaceChangeType::Deleted => write!(f, "deleted"),
        }
    }
}
