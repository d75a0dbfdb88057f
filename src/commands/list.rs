//! List command implementation
//!
//! Prints every discovered repository with its origin URL and the map of
//! non-origin remotes. Pure formatting of already-scanned data.

use anyhow::Result;
use std::path::Path;

use crate::core::{init_command, RepositorySet};

/// Renders a repository set into the listing shown to the user
pub fn render_repository_set(set: &RepositorySet) -> String {
    let repo_word = if set.len() == 1 {
        "repository"
    } else {
        "repositories"
    };

    let mut out = format!(
        "Found {} git {} in `{}`\n",
        set.len(),
        repo_word,
        set.repository_root.display()
    );

    for repo in set.repositories.values() {
        out.push('\n');
        out.push_str(&format!(
            "Repository: {}\n",
            set.repo_path(repo).display()
        ));
        out.push_str(&format!("Origin: {}\n", repo.origin_url));
        if repo.remote_urls.is_empty() {
            out.push_str("Remotes: (none)\n");
        } else {
            out.push_str("Remotes:\n");
            for (label, url) in &repo.remote_urls {
                out.push_str(&format!("  {label}: {url}\n"));
            }
        }
    }

    out
}

/// Handles the list command
pub async fn handle_list_command(repository_root: &Path) -> Result<()> {
    let (_start_time, set) = init_command(repository_root).await?;

    // Overwrite the scanning line, then print the listing
    print!("\r{:<40}\r", "");
    println!("{}", render_repository_set(&set));

    Ok(())
}
