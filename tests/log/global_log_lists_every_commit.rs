use crate::common::command::{
    committed_repository_dir, gitlet_add, gitlet_branch, gitlet_checkout, gitlet_commit,
    gitlet_output, log_commit_ids,
};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    gitlet_branch(dir, "side");
    gitlet_checkout(dir, "side");
    write(dir, "f.txt", "on side\n");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "side work");
    let side_id = log_commit_ids(dir)[0].clone();

    gitlet_checkout(dir, "master");
    let mut expected_ids = log_commit_ids(dir);
    expected_ids.push(side_id);
    expected_ids.sort();

    let global_ids = gitlet_output(dir, &["global-log"])
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect::<Vec<_>>();

    assert_eq!(global_ids, expected_ids);
}
