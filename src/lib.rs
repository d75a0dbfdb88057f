//! # goobits-forks
//!
//! `goobits-forks` keeps a directory full of forked Git repositories in sync.
//! It powers the `forks` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: Scans the direct children of a root directory for Git
//!   working copies and records each one's configured remotes.
//! - **Bulk Pull**: Pulls `origin` into every discovered repository
//!   concurrently, with per-repository failure isolation.
//! - **Bulk Push**: Pushes all branches to every non-origin remote,
//!   answering interactive credential prompts automatically.
//!
//! ## Example
//!
//! ```rust,no_run
//! use goobits_forks::core::scan_repository_root;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let set = scan_repository_root(std::path::Path::new("~/forks")).await?;
//!     for repo in set.repositories.values() {
//!         println!("{}: {}", repo.name, repo.origin_url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
