use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, gitlet_add, gitlet_branch, gitlet_checkout,
    gitlet_commit, gitlet_output, gitlet_rm, read_commit_object,
};
use crate::common::file::{read, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_with_a_conflict(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    gitlet_branch(dir, "b1");

    write(dir, "f.txt", "X\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "master changes f");
    let master_id = get_head_commit_sha(dir);

    gitlet_checkout(dir, "b1");
    write(dir, "f.txt", "Y");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "b1 changes f");
    let b1_id = get_head_commit_sha(dir);

    gitlet_checkout(dir, "master");
    assert_eq!(
        gitlet_output(dir, &["merge", "b1"]),
        "Encountered a merge conflict.\n"
    );

    assert_eq!(read(dir, "f.txt"), "<<<<<<< HEAD\nX\n=======\nY\n>>>>>>>\n");

    let merge_commit = read_commit_object(dir, &get_head_commit_sha(dir));
    assert!(merge_commit.contains(&format!("parent {}\nparent {}\n", master_id, b1_id)));
    assert!(gitlet_output(dir, &["status"]).contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn merge_conflicts_when_one_side_deletes_a_changed_file(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    gitlet_branch(dir, "b1");

    gitlet_rm(dir, "f.txt");
    gitlet_commit(dir, "master deletes f");

    gitlet_checkout(dir, "b1");
    write(dir, "f.txt", "Y\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "b1 changes f");

    gitlet_checkout(dir, "master");
    assert!(!dir.join("f.txt").exists());
    assert_eq!(
        gitlet_output(dir, &["merge", "b1"]),
        "Encountered a merge conflict.\n"
    );

    assert_eq!(read(dir, "f.txt"), "<<<<<<< HEAD\n=======\nY\n>>>>>>>\n");
}
