//! Update-remote command implementation
//!
//! Pushes all branches of every discovered repository to each of its
//! non-origin remotes, answering git's interactive credential prompts.
//! Pushes run strictly sequentially so that only one prompt conversation is
//! ever in flight; a failed push never skips the remaining remotes or
//! repositories.

use anyhow::Result;
use std::path::Path;

use crate::core::{clean_error_message, init_command, BatchStatistics, FailureDetail};
use crate::git::{push_all_branches, Credentials, Status};

/// Handles the update-remote command
pub async fn handle_update_remote_command(
    repository_root: &Path,
    credentials: Credentials,
) -> Result<()> {
    let (start_time, set) = init_command(repository_root).await?;

    if set.is_empty() {
        println!(
            "\rNo git repositories found in `{}`",
            repository_root.display()
        );
        return Ok(());
    }

    let total_repos = set.len();
    let repo_word = if total_repos == 1 {
        "repository"
    } else {
        "repositories"
    };
    print!("\r🚀 Pushing {total_repos} {repo_word} to their remotes                    \n");
    println!();

    let statistics = BatchStatistics::new();

    for repo in set.repositories.values() {
        let repo_path = set.repo_path(repo);

        if repo.remote_urls.is_empty() {
            println!(
                "{} {:<20} {:<10}   no non-origin remotes",
                Status::NoRemotes.symbol(),
                repo.name,
                Status::NoRemotes.text()
            );
            statistics.record_skip();
            continue;
        }

        for (label, url) in &repo.remote_urls {
            let item = format!("{} → {label}", repo.name);

            match push_all_branches(&repo_path, label, &credentials).await {
                Ok(outcome) if outcome.success => {
                    println!(
                        "{} {:<20} {:<10}   all branches → {label} ({url})",
                        Status::Pushed.symbol(),
                        repo.name,
                        Status::Pushed.text()
                    );
                    statistics.record_success();
                }
                Ok(outcome) => {
                    println!(
                        "{} {:<20} {:<10}   push to {label} ({url})",
                        Status::Error.symbol(),
                        repo.name,
                        Status::Error.text()
                    );
                    statistics.record_failure(FailureDetail {
                        item,
                        path: repo_path.to_string_lossy().into_owned(),
                        message: clean_error_message(&outcome.transcript),
                        diagnostics: outcome.transcript,
                    });
                }
                Err(e) => {
                    println!(
                        "{} {:<20} {:<10}   push to {label} ({url})",
                        Status::Error.symbol(),
                        repo.name,
                        Status::Error.text()
                    );
                    statistics.record_failure(FailureDetail {
                        item,
                        path: repo_path.to_string_lossy().into_owned(),
                        message: clean_error_message(&e.to_string()),
                        diagnostics: e.to_string(),
                    });
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        statistics.generate_summary("pushed", start_time.elapsed())
    );

    let detailed_summary = statistics.generate_detailed_summary();
    if !detailed_summary.is_empty() {
        println!("\n{}", "━".repeat(70));
        println!("{detailed_summary}");
        println!("{}", "━".repeat(70));
    }

    println!();
    Ok(())
}
