use crate::common::command::{
    committed_repository_dir, gitlet_branch, gitlet_output, log_commit_ids, run_gitlet_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_branch_keeps_its_commits(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    gitlet_branch(dir, "feature/old");
    let commit_ids = log_commit_ids(dir);

    assert_eq!(gitlet_output(dir, &["rm-branch", "feature/old"]), "");

    assert!(!dir.join(".gitlet").join("branches").join("feature").exists());
    assert_eq!(log_commit_ids(dir), commit_ids);
}

#[rstest]
fn remove_missing_branch_fails(committed_repository_dir: TempDir) {
    run_gitlet_command(committed_repository_dir.path(), &["rm-branch", "ghost"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
}

#[rstest]
fn remove_current_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm-branch", "master"])
        .assert()
        .success()
        .stdout("Cannot remove the current branch.\n");

    assert!(dir.join(".gitlet").join("branches").join("master").is_file());
}
