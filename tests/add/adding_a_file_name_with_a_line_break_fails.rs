use crate::common::command::{
    committed_repository_dir, gitlet_output, log_commit_ids, run_gitlet_command,
};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_file_name_with_a_line_break_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write(dir, "evil\nname", "payload\n");

    run_gitlet_command(dir, &["add", "evil\nname"])
        .assert()
        .success()
        .stdout("File name \"evil\\nname\" cannot be tracked.\n");

    run_gitlet_command(dir, &["commit", "evil"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    // the repository stays readable
    assert_eq!(log_commit_ids(dir).len(), 2);
    assert!(gitlet_output(dir, &["status"]).contains("=== Staged Files ===\n\n"));
}
