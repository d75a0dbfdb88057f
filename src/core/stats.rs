//! Statistics tracking for batch repository operations

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::config::{
    ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, PATH_DISPLAY_WIDTH,
};
use crate::utils::shorten_path;

/// Captured diagnostics for one failed item (a repository, or a
/// repository/remote pair for pushes).
#[derive(Clone, Debug)]
pub struct FailureDetail {
    /// Display label: repository name, or `repo → remote` for pushes
    pub item: String,
    /// Filesystem path of the repository involved
    pub path: String,
    /// One-line condensed error for the status row
    pub message: String,
    /// Raw captured output from the failed git invocation
    pub diagnostics: String,
}

/// Statistics for tracking batch operation results
///
/// Uses atomic counters for lock-free reads and writes of simple counters,
/// while the failure list remains behind a Mutex.
#[derive(Debug, Default)]
pub struct BatchStatistics {
    pub completed: AtomicU64,
    pub skipped: AtomicU64,
    pub failed: AtomicU64,
    pub failures: Mutex<Vec<FailureDetail>>,
}

impl BatchStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, detail: FailureDetail) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut guard) = self.failures.lock() {
            guard.push(detail);
        } else {
            eprintln!("Warning: Failed to record failure details");
        }
    }

    /// Generates a one-line summary of the batch results
    pub fn generate_summary(&self, noun: &str, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let completed = self.completed.load(Ordering::Relaxed);
        let skipped = self.skipped.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);

        let mut summary = format!(
            "✅ Completed in {duration_secs:.1}s • {completed} {noun}"
        );
        if skipped > 0 {
            summary.push_str(&format!(" • {skipped} skipped"));
        }
        if failed > 0 {
            summary.push_str(&format!(" • {failed} failed"));
        }

        summary
    }

    /// Generates the detailed failure report, including the captured output
    /// of every failed git invocation
    pub fn generate_detailed_summary(&self) -> String {
        let failures = match self.failures.lock() {
            Ok(guard) => guard,
            Err(_) => {
                eprintln!("Warning: Failed to acquire lock for failure details");
                return String::new();
            }
        };

        if failures.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        lines.push(format!("🔴 FAILED ({})", failures.len()));
        for (i, detail) in failures.iter().enumerate() {
            let tree_char = if i == failures.len() - 1 { "└─" } else { "├─" };
            let short_path = shorten_path(&detail.path, PATH_DISPLAY_WIDTH);
            lines.push(format!(
                "   {} {:20} {:30} # {}",
                tree_char, detail.item, short_path, detail.message
            ));
            for diag_line in detail.diagnostics.lines().filter(|l| !l.trim().is_empty()) {
                lines.push(format!("      {diag_line}"));
            }
        }

        lines.join("\n")
    }
}

/// Cleans and formats error messages for single-row display
pub fn clean_error_message(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error.replace('\n', " ").replace('\r', "").replace('\t', " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    // Extract key error patterns
    if cleaned.contains("timed out") {
        "timeout".to_string()
    } else if cleaned.contains("authentication")
        || cleaned.contains("Authentication")
        || cleaned.contains("Permission denied")
    {
        "authentication failed".to_string()
    } else if cleaned.contains("Could not resolve host") || cleaned.contains("Connection") {
        "network error".to_string()
    } else if cleaned.contains("couldn't find remote ref") || cleaned.contains("does not appear") {
        "remote unavailable".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        // Truncate by characters, not bytes: captured git output may carry
        // localized messages or non-ASCII branch/path names
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}
