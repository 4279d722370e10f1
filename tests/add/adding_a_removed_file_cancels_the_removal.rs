use crate::common::command::{committed_repository_dir, gitlet_add, gitlet_output, gitlet_rm};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_removed_file_cancels_the_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    gitlet_rm(dir, "f.txt");
    assert!(!dir.join("f.txt").exists());

    write(dir, "f.txt", "A\n");
    gitlet_add(dir, "f.txt");

    let expected_output = "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n";
    assert_eq!(gitlet_output(dir, &["status"]), expected_output);
}
