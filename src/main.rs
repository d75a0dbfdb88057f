//! forks: bulk operations over a directory of forked git repositories
//!
//! Scans the direct children of a root directory for git working copies and
//! applies one batch operation across the whole set: list the repositories
//! and their remotes, pull origin into each local copy, or push all branches
//! to every non-origin remote.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use goobits_forks::commands::{
    handle_list_command, handle_update_local_command, handle_update_remote_command,
};
use goobits_forks::git::Credentials;

#[derive(Parser)]
#[command(
    name = "forks",
    version,
    about = "Keep a directory full of forked git repositories in sync"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List discovered repositories and their configured remotes
    List {
        /// Directory whose direct children are scanned for working copies
        path: PathBuf,
    },
    /// Pull "origin" into every discovered repository
    UpdateLocal {
        /// Directory whose direct children are scanned for working copies
        path: PathBuf,
        /// Number of concurrent pulls (default: CPU cores + 2, capped)
        #[arg(long)]
        jobs: Option<usize>,
        /// Pull one repository at a time
        #[arg(long)]
        sequential: bool,
    },
    /// Push all branches to every non-origin remote, authenticating interactively
    UpdateRemote {
        /// Username supplied to interactive credential prompts
        #[arg(long)]
        username: String,
        /// Password supplied to interactive credential prompts
        #[arg(long)]
        password: String,
        /// Directory whose direct children are scanned for working copies
        path: PathBuf,
    },
}

impl Command {
    fn repository_root(&self) -> &PathBuf {
        match self {
            Command::List { path }
            | Command::UpdateLocal { path, .. }
            | Command::UpdateRemote { path, .. } => path,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A bad target is fatal before any scanning or mutation begins
    let root = cli.command.repository_root();
    if !root.exists() {
        anyhow::bail!("Path does not exist: {}", root.display());
    }

    match &cli.command {
        Command::List { path } => handle_list_command(path).await,
        Command::UpdateLocal {
            path,
            jobs,
            sequential,
        } => handle_update_local_command(path, *jobs, *sequential).await,
        Command::UpdateRemote {
            username,
            password,
            path,
        } => {
            let credentials = Credentials {
                username: username.clone(),
                password: password.clone(),
            };
            handle_update_remote_command(path, credentials).await
        }
    }
}
