//! Shared test utilities

pub mod git;

#[allow(unused_imports)]
pub use git::{
    add_git_remote, clone_repo, create_bare_repo, create_test_commit, is_git_available,
    setup_git_repo,
};
