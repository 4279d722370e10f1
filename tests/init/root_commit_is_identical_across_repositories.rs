use crate::common::command::{get_head_commit_sha, init_repository_dir, run_gitlet_command};
use crate::common::redirect_temp_dir;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn root_commit_is_identical_across_repositories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    redirect_temp_dir();
    let other_dir = TempDir::new()?;
    run_gitlet_command(other_dir.path(), &["init"])
        .assert()
        .success();

    assert_eq!(
        get_head_commit_sha(init_repository_dir.path()),
        get_head_commit_sha(other_dir.path())
    );

    Ok(())
}
