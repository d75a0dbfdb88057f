//! Repository discovery: scanning a root directory for Git working copies

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::config::{ORIGIN_LABEL, SCANNING_MESSAGE};
use super::repo::{Repository, RepositorySet};
use crate::git::{collect_remote_urls, is_working_copy, list_remote_labels, resolve_remote_url};

/// Scans the direct children of `repository_root` and assembles a
/// [`RepositorySet`] from the ones that are Git working copies.
///
/// Children are visited in directory-listing order; entries that fail the
/// working-copy check are silently skipped. Every git invocation receives
/// the child path explicitly, so the process working directory is never
/// changed. Remote labels whose URL cannot be resolved map to an empty
/// string rather than failing the scan.
pub async fn scan_repository_root(repository_root: &Path) -> Result<RepositorySet> {
    let mut set = RepositorySet::new(repository_root);

    let entries = fs::read_dir(repository_root).with_context(|| {
        format!(
            "Failed to read repository root `{}`",
            repository_root.display()
        )
    })?;

    for entry in entries {
        let entry = entry.with_context(|| {
            format!(
                "Failed to read entry under `{}`",
                repository_root.display()
            )
        })?;
        let path = entry.path();

        if !is_working_copy(&path).await {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        let origin_url = resolve_remote_url(&path, ORIGIN_LABEL)
            .await
            .unwrap_or_default();

        let labels = list_remote_labels(&path).await;
        let remote_urls = collect_remote_urls(&path, &labels, &[ORIGIN_LABEL]).await;

        set.repositories.insert(
            name.clone(),
            Repository {
                name,
                origin_url,
                remote_urls,
            },
        );
    }

    Ok(set)
}

/// Common initialization for commands that scan repositories
pub async fn init_command(repository_root: &Path) -> Result<(std::time::Instant, RepositorySet)> {
    println!();
    print!("{SCANNING_MESSAGE}");
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();

    let start_time = std::time::Instant::now();
    let set = scan_repository_root(repository_root).await?;

    Ok((start_time, set))
}
