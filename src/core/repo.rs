//! Domain model: discovered repositories and the set built by one scan

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// One discovered Git working copy, one level below the scan root.
///
/// Constructed once during scanning and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Repository {
    /// Directory name; unique within a [`RepositorySet`] and used as the
    /// relative path segment under the scan root.
    pub name: String,
    /// Resolved URL of the remote labeled "origin"; empty when that label
    /// is absent or unresolvable.
    pub origin_url: String,
    /// Label → URL for every configured remote except "origin", in the
    /// order `git remote` reports them.
    pub remote_urls: IndexMap<String, String>,
}

/// The result of scanning one root directory.
#[derive(Clone, Debug, Default)]
pub struct RepositorySet {
    /// The directory that was scanned.
    pub repository_root: PathBuf,
    /// Name → repository, in directory-listing order filtered by detection.
    /// Every key equals the `name` field of its value.
    pub repositories: IndexMap<String, Repository>,
}

impl RepositorySet {
    pub fn new(repository_root: impl AsRef<Path>) -> Self {
        Self {
            repository_root: repository_root.as_ref().to_path_buf(),
            repositories: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Resolves a repository's filesystem path under the scan root.
    pub fn repo_path(&self, repo: &Repository) -> PathBuf {
        self.repository_root.join(&repo.name)
    }
}
