//! Basic git operations and command execution

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

// Timeout constants
const GIT_OPERATION_TIMEOUT_SECS: u64 = 180; // 3 minutes per repository

// Git command arguments
const GIT_IS_WORK_TREE_ARGS: &[&str] = &["rev-parse", "--is-inside-work-tree"];
const GIT_PULL_ORIGIN_ARGS: &[&str] = &["pull", "origin"];

/// Runs a git command in the specified directory with a timeout
/// Returns (success, stdout, stderr)
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(bool, String, String)> {
    let timeout_duration = Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS);

    let result = tokio::time::timeout(
        timeout_duration,
        Command::new("git").args(args).current_dir(path).output(),
    )
    .await;

    match result {
        Ok(Ok(output)) => Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(anyhow::anyhow!(
            "Git operation timed out after {} seconds",
            GIT_OPERATION_TIMEOUT_SECS
        )),
    }
}

/// Checks whether `path` is a Git working copy.
///
/// Non-directories are rejected without invoking git. Otherwise git is asked
/// whether the directory is inside a work tree; the answer is the exit
/// status. The directory is passed to the subprocess explicitly, so the
/// caller's working directory is never touched. Fails closed to `false` on
/// any invocation error.
pub async fn is_working_copy(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }

    matches!(run_git(path, GIT_IS_WORK_TREE_ARGS).await, Ok((true, _, _)))
}

/// Pulls from the "origin" remote in the specified repository
/// Returns (success, stdout, stderr)
pub async fn pull_origin(path: &Path) -> Result<(bool, String, String)> {
    run_git(path, GIT_PULL_ORIGIN_ARGS).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command as StdCommand;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_is_working_copy_rejects_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(!is_working_copy(&missing).await);
    }

    #[tokio::test]
    async fn test_is_working_copy_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "not a repo").unwrap();
        assert!(!is_working_copy(&file).await);
    }

    #[tokio::test]
    async fn test_is_working_copy_accepts_initialized_repo() {
        let temp_dir = TempDir::new().unwrap();
        let status = StdCommand::new("git")
            .args(["init", "-q"])
            .current_dir(temp_dir.path())
            .status()
            .expect("git must be available");
        assert!(status.success());

        assert!(is_working_copy(temp_dir.path()).await);
    }

    #[tokio::test]
    async fn test_is_working_copy_preserves_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        is_working_copy(temp_dir.path()).await;
        assert_eq!(before, std::env::current_dir().unwrap());
    }

    #[tokio::test]
    async fn test_run_git_captures_stderr_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let (success, _, stderr) = run_git(temp_dir.path(), &["rev-parse", "HEAD"])
            .await
            .unwrap();
        assert!(!success);
        assert!(!stderr.is_empty());
    }
}
