pub mod interactive;
pub mod operations;
pub mod remotes;
pub mod status;

// Re-export the operations the commands consume; PTY plumbing stays internal
pub use interactive::{push_all_branches, Credentials, InteractiveOutcome};
pub use operations::{is_working_copy, pull_origin, run_git};
pub use remotes::{collect_remote_urls, list_remote_labels, resolve_remote_url, RemoteError};
pub use status::Status;
