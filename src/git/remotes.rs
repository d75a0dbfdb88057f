//! Remote inspection: listing remote labels and resolving their URLs

use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

use super::operations::run_git;

/// Failure to resolve a remote label to a URL.
///
/// `NotFound` is an expected per-label condition: callers store an empty
/// string for that label instead of propagating.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("repository has no URL for remote `{label}`")]
    NotFound { label: String },
    #[error("git invocation failed: {0}")]
    Invocation(String),
}

/// Resolves the URL bound to `label` in the repository at `path`.
pub async fn resolve_remote_url(path: &Path, label: &str) -> Result<String, RemoteError> {
    match run_git(path, &["remote", "get-url", label]).await {
        Ok((true, url, _)) => Ok(url),
        Ok((false, _, _)) => Err(RemoteError::NotFound {
            label: label.to_string(),
        }),
        Err(e) => Err(RemoteError::Invocation(e.to_string())),
    }
}

/// Lists the remote labels configured in the repository at `path`, in the
/// order git reports them. An empty list is a normal result, not a failure.
pub async fn list_remote_labels(path: &Path) -> Vec<String> {
    match run_git(path, &["remote"]).await {
        Ok((true, output, _)) if !output.is_empty() => {
            output.lines().map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

/// Resolves every label not in `exclude` to its URL.
///
/// Resolution failures are per-label: a label without a URL maps to an
/// empty string rather than aborting the collection.
pub async fn collect_remote_urls(
    path: &Path,
    labels: &[String],
    exclude: &[&str],
) -> IndexMap<String, String> {
    let mut urls = IndexMap::new();

    for label in labels {
        if exclude.iter().any(|e| e == label) {
            continue;
        }

        let url = resolve_remote_url(path, label).await.unwrap_or_default();
        urls.insert(label.clone(), url);
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(path)
            .status()
            .expect("git must be available for remote tests");
        assert!(status.success());
    }

    fn init_repo_with_remotes(remotes: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        git(temp_dir.path(), &["init", "-q"]);
        for (label, url) in remotes {
            git(temp_dir.path(), &["remote", "add", label, url]);
        }
        temp_dir
    }

    #[tokio::test]
    async fn test_resolve_known_remote() {
        let repo = init_repo_with_remotes(&[("origin", "https://x/a.git")]);

        let url = resolve_remote_url(repo.path(), "origin").await.unwrap();
        assert_eq!(url, "https://x/a.git");
    }

    #[tokio::test]
    async fn test_resolve_unknown_remote_is_not_found() {
        let repo = init_repo_with_remotes(&[]);

        let err = resolve_remote_url(repo.path(), "fork").await.unwrap_err();
        assert!(matches!(err, RemoteError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_labels_preserves_git_order() {
        let repo = init_repo_with_remotes(&[
            ("origin", "https://x/a.git"),
            ("fork", "https://y/a.git"),
            ("staging", "https://z/a.git"),
        ]);

        let labels = list_remote_labels(repo.path()).await;
        // git reports remotes sorted by name
        assert_eq!(labels, vec!["fork", "origin", "staging"]);
    }

    #[tokio::test]
    async fn test_list_labels_empty_without_remotes() {
        let repo = init_repo_with_remotes(&[]);
        assert!(list_remote_labels(repo.path()).await.is_empty());
    }

    #[tokio::test]
    async fn test_collect_excludes_origin() {
        let repo = init_repo_with_remotes(&[
            ("origin", "https://x/a.git"),
            ("fork", "https://y/a.git"),
        ]);

        let labels = list_remote_labels(repo.path()).await;
        let urls = collect_remote_urls(repo.path(), &labels, &["origin"]).await;

        assert!(!urls.contains_key("origin"));
        assert_eq!(urls["fork"], "https://y/a.git");
    }

    #[tokio::test]
    async fn test_collect_recovers_unresolvable_label_to_empty() {
        let repo = init_repo_with_remotes(&[("fork", "https://y/a.git")]);

        let labels = vec!["fork".to_string(), "ghost".to_string()];
        let urls = collect_remote_urls(repo.path(), &labels, &["origin"]).await;

        assert_eq!(urls["fork"], "https://y/a.git");
        assert_eq!(urls["ghost"], "");
    }
}
