use crate::common::command::{committed_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_missing_branch_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["checkout", "ghost"])
        .assert()
        .success()
        .stdout("No such branch exists.\n");
}

#[rstest]
fn checkout_current_branch_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout("No need to checkout the current branch.\n");
}
