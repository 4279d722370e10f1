use crate::common::command::{get_head_commit_sha, gitlet_output, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_creates_the_root_commit_on_master(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(gitlet_output(repository_dir.path(), &["init"]), "");

    let gitlet_dir = repository_dir.path().join(".gitlet");
    assert!(gitlet_dir.join("commits").is_dir());
    assert!(gitlet_dir.join("blobs").is_dir());
    assert!(gitlet_dir.join("branches").join("master").is_file());
    assert_eq!(
        std::fs::read_to_string(gitlet_dir.join("active-branch"))?,
        "master"
    );

    let root_id = get_head_commit_sha(repository_dir.path());
    let expected_output = format!(
        "===\ncommit {}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n",
        root_id
    );
    assert_eq!(gitlet_output(repository_dir.path(), &["log"]), expected_output);

    Ok(())
}
