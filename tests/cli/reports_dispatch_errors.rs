use crate::common::command::{init_repository_dir, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_command_is_reported(repository_dir: TempDir) {
    run_gitlet_command(repository_dir.path(), &[])
        .assert()
        .success()
        .stdout("Please enter a command.\n");
}

#[rstest]
fn unknown_command_is_reported(repository_dir: TempDir) {
    run_gitlet_command(repository_dir.path(), &["push"])
        .assert()
        .success()
        .stdout("No command with that name exists.\n");
}

#[rstest]
#[case(&["add"])]
#[case(&["add", "a.txt", "b.txt"])]
#[case(&["commit"])]
#[case(&["checkout"])]
#[case(&["checkout", "master", "extra"])]
#[case(&["branch"])]
#[case(&["merge"])]
#[case(&["log", "extra"])]
fn wrong_operand_shape_is_reported(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("Incorrect operands.\n");
}

#[rstest]
fn help_lists_every_command(repository_dir: TempDir) {
    run_gitlet_command(repository_dir.path(), &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("global-log"))
        .stdout(predicate::str::contains("rm-branch"));
}
