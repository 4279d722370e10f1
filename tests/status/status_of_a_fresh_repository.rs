use crate::common::command::{gitlet_output, init_repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_of_a_fresh_repository(init_repository_dir: TempDir) {
    let expected_output = "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n";

    assert_eq!(
        gitlet_output(init_repository_dir.path(), &["status"]),
        expected_output
    );
}
