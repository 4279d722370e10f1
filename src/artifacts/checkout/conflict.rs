use crate::errors::GitletError;

/// Reason a working tree cannot be switched to another commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConflictType {
    /// A working file the current commit does not track would be overwritten
    UntrackedOverwritten,
}

impl From<&ConflictType> for GitletError {
    fn from(value: &ConflictType) -> Self {
        match value {
            ConflictType::UntrackedOverwritten => GitletError::UntrackedFileInTheWay,
        }
    }
}
