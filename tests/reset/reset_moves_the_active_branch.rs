use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, gitlet_add, gitlet_commit, gitlet_output,
    log_commit_ids,
};
use crate::common::file::{read, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_active_branch(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let first_id = get_head_commit_sha(dir);

    write(dir, "f.txt", "B\n");
    write(dir, "g.txt", "G\n");
    gitlet_add(dir, "f.txt");
    gitlet_add(dir, "g.txt");
    gitlet_commit(dir, "second");
    let second_ids = log_commit_ids(dir);

    write(dir, "staged.txt", "S\n");
    gitlet_add(dir, "staged.txt");

    assert_eq!(gitlet_output(dir, &["reset", &first_id[..8]]), "");

    assert_eq!(get_head_commit_sha(dir), first_id);
    assert_eq!(read(dir, "f.txt"), "A\n");
    assert!(!dir.join("g.txt").exists());
    // the staged file was never tracked, so it stays untracked
    assert!(gitlet_output(dir, &["status"]).contains(
        "=== Staged Files ===\n\n=== Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\nstaged.txt\n"
    ));

    assert_eq!(gitlet_output(dir, &["reset", &second_ids[0]]), "");
    assert_eq!(read(dir, "g.txt"), "G\n");
    assert_eq!(log_commit_ids(dir), second_ids);
}
