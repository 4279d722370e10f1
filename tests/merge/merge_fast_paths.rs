use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, gitlet_add, gitlet_branch, gitlet_checkout,
    gitlet_commit, gitlet_output,
};
use crate::common::file::{read, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_an_ancestor_does_nothing(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    gitlet_branch(dir, "old");

    write(dir, "f.txt", "newer\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "newer");
    let head_id = get_head_commit_sha(dir);

    assert_eq!(
        gitlet_output(dir, &["merge", "old"]),
        "Given branch is an ancestor of the current branch.\n"
    );
    assert_eq!(get_head_commit_sha(dir), head_id);
    assert_eq!(read(dir, "f.txt"), "newer\n");
}

#[rstest]
fn merge_a_descendant_fast_forwards(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    gitlet_branch(dir, "behind");

    write(dir, "f.txt", "ahead\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "ahead");
    let ahead_id = get_head_commit_sha(dir);

    gitlet_checkout(dir, "behind");
    assert_eq!(read(dir, "f.txt"), "A\n");

    assert_eq!(
        gitlet_output(dir, &["merge", "master"]),
        "Current branch fast-forwarded.\n"
    );
    assert_eq!(read(dir, "f.txt"), "ahead\n");
    assert_eq!(get_head_commit_sha(dir), ahead_id);
}
