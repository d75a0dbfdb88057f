//! Update-local command implementation
//!
//! Pulls `origin` into every discovered repository. Pulls run concurrently
//! under a semaphore; one repository's failure never aborts the batch, and
//! the captured git output of every failure is reported at the end.

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::progress::{
    acquire_semaphore_permit, create_footer_progress_bar, create_progress_bar,
    create_progress_style, create_separator_progress_bar,
};
use crate::core::{
    clean_error_message, get_git_concurrency, init_command, BatchStatistics, FailureDetail,
    RepositorySet, PULLING_MESSAGE,
};
use crate::git::{pull_origin, Status};

/// Pulls origin into one repository
/// Returns (status, row message, captured diagnostics)
async fn update_repo(path: &Path) -> (Status, String, String) {
    match pull_origin(path).await {
        Ok((true, _, _)) => (Status::Updated, "pulled from origin".to_string(), String::new()),
        Ok((false, stdout, stderr)) => {
            let diagnostics = format!("{stderr}\n{stdout}");
            (Status::Error, clean_error_message(&stderr), diagnostics)
        }
        Err(e) => {
            let text = e.to_string();
            (Status::Error, clean_error_message(&text), text)
        }
    }
}

/// Handles the update-local command
pub async fn handle_update_local_command(
    repository_root: &Path,
    jobs: Option<usize>,
    sequential: bool,
) -> Result<()> {
    let (start_time, set) = init_command(repository_root).await?;

    if set.is_empty() {
        println!(
            "\rNo git repositories found in `{}`",
            repository_root.display()
        );
        return Ok(());
    }

    let concurrent_limit = get_git_concurrency(jobs, sequential);
    let total_repos = set.len();
    let repo_word = if total_repos == 1 {
        "repository"
    } else {
        "repositories"
    };
    print!("\r🚀 Updating {total_repos} {repo_word} from origin                    \n");
    println!();

    let statistics = process_repositories(&set, concurrent_limit, start_time).await?;

    // Print the final detailed report when any pull failed
    let detailed_summary = statistics.generate_detailed_summary();
    if !detailed_summary.is_empty() {
        println!("\n{}", "━".repeat(70));
        println!("{detailed_summary}");
        println!("{}", "━".repeat(70));
    }

    println!();
    Ok(())
}

/// Pulls origin into every repository in the set, at most `concurrent_limit`
/// at a time, and returns the accumulated statistics
pub async fn process_repositories(
    set: &RepositorySet,
    concurrent_limit: usize,
    start_time: std::time::Instant,
) -> Result<Arc<BatchStatistics>> {
    let items: Vec<(String, PathBuf)> = set
        .repositories
        .values()
        .map(|repo| (repo.name.clone(), set.repo_path(repo)))
        .collect();
    let max_name_length = items.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let multi_progress = indicatif::MultiProgress::new();
    let progress_style = create_progress_style()?;
    let statistics = Arc::new(BatchStatistics::new());
    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrent_limit));

    let mut repo_progress_bars = Vec::new();
    for (repo_name, _) in &items {
        repo_progress_bars.push(create_progress_bar(
            &multi_progress,
            &progress_style,
            repo_name,
            PULLING_MESSAGE,
        ));
    }

    create_separator_progress_bar(&multi_progress);
    let footer_pb = create_footer_progress_bar(&multi_progress);
    footer_pb.set_message(statistics.generate_summary("updated", start_time.elapsed()));
    create_separator_progress_bar(&multi_progress);

    let mut futures = FuturesUnordered::new();

    for ((repo_name, repo_path), progress_bar) in items.into_iter().zip(repo_progress_bars) {
        let stats_clone = Arc::clone(&statistics);
        let semaphore_clone = Arc::clone(&semaphore);
        let footer_clone = footer_pb.clone();

        let future = async move {
            let _permit = acquire_semaphore_permit(&semaphore_clone).await;

            let (status, message, diagnostics) = update_repo(&repo_path).await;

            progress_bar.set_prefix(format!(
                "{} {:width$}",
                status.symbol(),
                repo_name,
                width = max_name_length
            ));
            progress_bar.set_message(format!("{:<10}   {}", status.text(), message));
            progress_bar.finish();

            match status {
                Status::Error => stats_clone.record_failure(FailureDetail {
                    item: repo_name,
                    path: repo_path.to_string_lossy().into_owned(),
                    message,
                    diagnostics,
                }),
                _ => stats_clone.record_success(),
            }

            footer_clone.set_message(
                stats_clone.generate_summary("updated", start_time.elapsed()),
            );
        };

        futures.push(future);
    }

    // Wait for all repository operations to complete
    while futures.next().await.is_some() {}

    footer_pb.finish();

    Ok(statistics)
}
