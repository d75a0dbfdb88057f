//! Configuration constants and settings

// The remote label that points at the upstream copy of a fork. Pulls come
// from it, and it is excluded from the remote map by construction.
pub const ORIGIN_LABEL: &str = "origin";

// Concurrency Configuration
//
// Pulls are I/O-bound git operations, so they tolerate moderate concurrency.
// The cap prevents overwhelming a forge's concurrent request limits.
pub const GIT_CONCURRENT_CAP: usize = 12;

/// Determines the concurrency limit for bulk pull operations
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N
/// 3. Smart default → min(CPU_CORES + 2, 12)
pub fn get_git_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    let cpu_count = num_cpus::get();
    (cpu_count + 2).min(GIT_CONCURRENT_CAP)
}

// Progress bar configuration
pub const DEFAULT_PROGRESS_BAR_LENGTH: u64 = 100;
pub const PROGRESS_CHARS: &str = "##-";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} {wide_msg}";

// UI Constants
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for git repositories...";
pub const PULLING_MESSAGE: &str = "pulling...";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 30;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 40;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 37;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_overrides_jobs() {
        assert_eq!(get_git_concurrency(Some(8), true), 1);
    }

    #[test]
    fn test_explicit_jobs() {
        assert_eq!(get_git_concurrency(Some(4), false), 4);
        // Zero is clamped to one worker
        assert_eq!(get_git_concurrency(Some(0), false), 1);
    }

    #[test]
    fn test_default_is_capped() {
        let n = get_git_concurrency(None, false);
        assert!(n >= 1);
        assert!(n <= GIT_CONCURRENT_CAP);
    }
}
