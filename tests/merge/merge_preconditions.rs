use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, gitlet_add, gitlet_branch, gitlet_checkout,
    gitlet_commit, run_gitlet_command,
};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn diverge(dir: &Path) {
    gitlet_branch(dir, "b1");
    write(dir, "master.txt", "M\n");
    gitlet_add(dir, "master.txt");
    gitlet_commit(dir, "master work");

    gitlet_checkout(dir, "b1");
    write(dir, "b1.txt", "B\n");
    gitlet_add(dir, "b1.txt");
    gitlet_commit(dir, "b1 work");
    gitlet_checkout(dir, "master");
}

#[rstest]
fn merge_missing_branch_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["merge", "ghost"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
}

#[rstest]
fn merge_with_itself_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["merge", "master"])
        .assert()
        .success()
        .stdout("Cannot merge a branch with itself.\n");
}

#[rstest]
fn merge_with_uncommitted_changes_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    diverge(dir);
    let head_id = get_head_commit_sha(dir);

    write(dir, "f.txt", "staged\n");
    gitlet_add(dir, "f.txt");

    run_gitlet_command(dir, &["merge", "b1"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");
    assert_eq!(get_head_commit_sha(dir), head_id);
    assert!(!dir.join("b1.txt").exists());
}

#[rstest]
fn merge_with_an_untracked_file_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    diverge(dir);
    let head_id = get_head_commit_sha(dir);

    // untracked even though the other branch does not track it
    write(dir, "scratch.txt", "S\n");

    run_gitlet_command(dir, &["merge", "b1"])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");
    assert_eq!(get_head_commit_sha(dir), head_id);
    assert!(!dir.join("b1.txt").exists());
}
