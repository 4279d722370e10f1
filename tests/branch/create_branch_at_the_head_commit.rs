use crate::common::command::{committed_repository_dir, get_head_commit_sha, gitlet_branch};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_the_head_commit(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    gitlet_branch(dir, "feature");

    let branch_tip =
        std::fs::read_to_string(dir.join(".gitlet").join("branches").join("feature"))?;
    assert_eq!(branch_tip, get_head_commit_sha(dir));
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet").join("active-branch"))?,
        "master"
    );

    Ok(())
}
