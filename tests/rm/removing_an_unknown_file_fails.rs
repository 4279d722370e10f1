use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::write;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn removing_an_unknown_file_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write(dir, "untracked.txt", "U\n");

    run_gitlet_command(dir, &["rm", "untracked.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");

    assert!(dir.join("untracked.txt").exists());
}
