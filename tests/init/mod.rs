mod init_creates_the_root_commit_on_master;
mod root_commit_is_identical_across_repositories;
