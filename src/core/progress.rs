//! Progress bar management for concurrent batch operations

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;

use super::config::{DEFAULT_PROGRESS_BAR_LENGTH, PROGRESS_CHARS, PROGRESS_TEMPLATE};

/// Creates and configures a progress row for a repository
pub(crate) fn create_progress_bar(
    multi: &MultiProgress,
    style: &ProgressStyle,
    repo_name: &str,
    initial_message: &str,
) -> ProgressBar {
    let pb = multi.add(ProgressBar::new(DEFAULT_PROGRESS_BAR_LENGTH));
    pb.set_style(style.clone());
    pb.set_prefix(format!("🟡 {repo_name}"));
    pb.set_message(initial_message.to_string());
    pb
}

/// Creates the progress bar style configuration
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)?
        .progress_chars(PROGRESS_CHARS))
}

/// Creates a separator row for visual spacing between sections
pub(crate) fn create_separator_progress_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let separator_pb = multi_progress.add(ProgressBar::new(0));
    separator_pb.set_style(
        ProgressStyle::default_bar()
            .template(" ")
            .expect("Failed to create separator progress bar template"),
    );
    separator_pb.finish();
    separator_pb
}

/// Creates the footer row used for the live summary line
pub(crate) fn create_footer_progress_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let footer_pb = multi_progress.add(ProgressBar::new(0));
    let footer_style = ProgressStyle::default_bar()
        .template("{wide_msg}")
        .expect("Failed to create footer progress style");
    footer_pb.set_style(footer_style);
    footer_pb
}

/// Helper functions for semaphore and mutex access
pub(crate) async fn acquire_semaphore_permit(
    semaphore: &'_ Arc<tokio::sync::Semaphore>,
) -> tokio::sync::SemaphorePermit<'_> {
    semaphore
        .acquire()
        .await
        .expect("Failed to acquire semaphore permit")
}
