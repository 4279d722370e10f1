use crate::common::command::{committed_repository_dir, get_head_commit_sha, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_requires_staged_changes(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let head_id = get_head_commit_sha(dir);

    run_gitlet_command(dir, &["commit", "nothing"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    assert_eq!(get_head_commit_sha(dir), head_id);
}
