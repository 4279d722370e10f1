use crate::common::file::write;
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Timestamp pinned on every commit made by the tests
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// How `log` renders `COMMIT_DATE`
pub const READABLE_COMMIT_DATE: &str = "Sun Jan 1 12:00:00 2023 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository whose `master` tracks `f.txt` with content "A\n"
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    write(init_repository_dir.path(), "f.txt", "A\n");
    gitlet_add(init_repository_dir.path(), "f.txt");
    gitlet_commit(init_repository_dir.path(), "add f");

    init_repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("GITLET_COMMIT_DATE", COMMIT_DATE)]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command that is expected to succeed and return its stdout
pub fn gitlet_output(dir: &Path, args: &[&str]) -> String {
    let output = run_gitlet_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

pub fn gitlet_add(dir: &Path, file: &str) {
    run_gitlet_command(dir, &["add", file])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_rm(dir: &Path, file: &str) {
    run_gitlet_command(dir, &["rm", file])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_commit(dir: &Path, message: &str) {
    run_gitlet_command(dir, &["commit", message])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_branch(dir: &Path, name: &str) {
    run_gitlet_command(dir, &["branch", name])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_checkout(dir: &Path, branch: &str) {
    run_gitlet_command(dir, &["checkout", branch])
        .assert()
        .success()
        .stdout("");
}

/// Commit IDs printed by `log`, newest first
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    gitlet_output(dir, &["log"])
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

/// Tip of the active branch, read straight from the metadata directory
pub fn get_head_commit_sha(dir: &Path) -> String {
    let gitlet_dir = dir.join(".gitlet");
    let active_branch = std::fs::read_to_string(gitlet_dir.join("active-branch"))
        .expect("Failed to read the active branch");

    std::fs::read_to_string(gitlet_dir.join("branches").join(active_branch.trim()))
        .expect("Failed to read the active branch tip")
        .trim()
        .to_string()
}

/// Raw serialized commit
pub fn read_commit_object(dir: &Path, commit_id: &str) -> String {
    let (prefix, rest) = commit_id.split_at(2);
    let bytes = std::fs::read(dir.join(".gitlet").join("commits").join(prefix).join(rest))
        .expect("Failed to read commit object");

    String::from_utf8(bytes).expect("commit object is not UTF-8")
}
