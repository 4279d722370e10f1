use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("trailing/")]
#[case("ends.lock")]
#[case("with space")]
#[case("star*")]
#[case("at@{brace")]
fn create_branch_with_an_invalid_name(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {}\n", name));

    assert!(
        !init_repository_dir
            .path()
            .join(".gitlet")
            .join("branches")
            .join(name)
            .exists()
    );
}
