use crate::common::command::{
    get_head_commit_sha, gitlet_add, gitlet_branch, gitlet_checkout, gitlet_commit,
    gitlet_output, repository_dir, run_gitlet_command,
};
use crate::common::file::{read, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

/// Conflicting merge on a fresh repository, returning the merge commit ID
fn conflicting_merge(dir: &Path) -> String {
    run_gitlet_command(dir, &["init"]).assert().success();
    write(dir, "f.txt", "base\n");
    write(dir, "g.txt", "base\n");
    gitlet_add(dir, "f.txt");
    gitlet_add(dir, "g.txt");
    gitlet_commit(dir, "base");

    gitlet_branch(dir, "b1");
    write(dir, "f.txt", "master\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "master side");

    gitlet_checkout(dir, "b1");
    write(dir, "f.txt", "b1\n");
    write(dir, "g.txt", "b1\n");
    gitlet_add(dir, "f.txt");
    gitlet_add(dir, "g.txt");
    gitlet_commit(dir, "b1 side");

    gitlet_checkout(dir, "master");
    assert_eq!(
        gitlet_output(dir, &["merge", "b1"]),
        "Encountered a merge conflict.\n"
    );
    assert_eq!(read(dir, "g.txt"), "b1\n");

    get_head_commit_sha(dir)
}

#[rstest]
fn merge_is_deterministic(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let other_dir = TempDir::new()?;

    assert_eq!(
        conflicting_merge(repository_dir.path()),
        conflicting_merge(other_dir.path())
    );
    assert_eq!(
        read(repository_dir.path(), "f.txt"),
        read(other_dir.path(), "f.txt")
    );

    Ok(())
}
