use crate::common::command::{
    READABLE_COMMIT_DATE, gitlet_add, gitlet_commit, gitlet_output, init_repository_dir,
    log_commit_ids,
};
use crate::common::file::write;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_after_first_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write(dir, "f.txt", "A");
    gitlet_add(dir, "f.txt");
    gitlet_commit(dir, "first");

    let commit_ids = log_commit_ids(dir);
    assert_eq!(commit_ids.len(), 2);

    let expected_output = format!(
        "===\ncommit {}\nDate: {}\nfirst\n\n\
         ===\ncommit {}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n",
        commit_ids[0], READABLE_COMMIT_DATE, commit_ids[1]
    );
    assert_eq!(gitlet_output(dir, &["log"]), expected_output);
}
