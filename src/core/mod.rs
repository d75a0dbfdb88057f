pub mod config;
pub mod discovery;
pub mod progress;
pub mod repo;
pub mod stats;

// Re-export the names the commands consume; display constants and
// progress-bar helpers stay internal
pub use config::{get_git_concurrency, PULLING_MESSAGE};
pub use discovery::{init_command, scan_repository_root};
pub use repo::{Repository, RepositorySet};
pub use stats::{clean_error_message, BatchStatistics, FailureDetail};
