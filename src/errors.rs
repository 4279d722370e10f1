//! User-visible failures
//!
//! Every diagnostic a command can abort with is a `GitletError` variant. They travel through
//! `anyhow::Error` like any other failure; the binary downcasts them to tell a user mistake
//! (printed, clean exit) apart from an internal consistency violation (fatal).

use thiserror::Error;

/// Broad category of a user-visible failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed operands
    UserInput,
    /// The repository is not in a state that allows the command
    Precondition,
    /// An object, commit, branch or file could not be located
    NotFound,
    /// The repository contradicts itself, e.g. a commit refers to a missing object
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("Please enter a command.")]
    MissingCommand,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("File name {0:?} cannot be tracked.")]
    UnsupportedFileName(String),

    #[error("Path {0} is outside the repository.")]
    PathOutsideRepository(String),

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithItself,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("Commit id {prefix} is ambiguous; candidates: {candidates}")]
    AmbiguousCommitId { prefix: String, candidates: String },

    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("Object {0} not found.")]
    ObjectNotFound(String),
}

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::MissingCommand
            | GitletError::UnknownCommand
            | GitletError::IncorrectOperands
            | GitletError::InvalidBranchName(_)
            | GitletError::UnsupportedFileName(_)
            | GitletError::PathOutsideRepository(_) => ErrorKind::UserInput,
            GitletError::NotInitialized
            | GitletError::AlreadyInitialized
            | GitletError::EmptyCommitMessage
            | GitletError::NothingToCommit
            | GitletError::NothingToRemove
            | GitletError::BranchAlreadyExists
            | GitletError::RemoveCurrentBranch
            | GitletError::AlreadyOnBranch
            | GitletError::UntrackedFileInTheWay
            | GitletError::UncommittedChanges
            | GitletError::MergeWithItself => ErrorKind::Precondition,
            GitletError::FileNotFound
            | GitletError::FileNotInCommit
            | GitletError::CommitNotFound
            | GitletError::AmbiguousCommitId { .. }
            | GitletError::BranchNotFound
            | GitletError::NoSuchBranch
            | GitletError::NoCommitWithMessage => ErrorKind::NotFound,
            GitletError::ObjectNotFound(_) => ErrorKind::Internal,
        }
    }

    /// Whether the failure is a consistency violation rather than a user mistake
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}
