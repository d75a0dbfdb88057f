//! Expect-style git invocation under a PTY
//!
//! Pushing to an authenticated remote makes git prompt for a username and
//! password on the controlling terminal. This module spawns git under a
//! pseudo-terminal, watches the output for prompt patterns, and writes the
//! configured replies, with an overall deadline so a silent child cannot
//! hang the batch.

use anyhow::{Context, Result};
use portable_pty::{native_pty_system, CommandBuilder, PtyPair, PtySize};
use regex::Regex;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

// Prompt patterns, matched case-insensitively against the transcript
const USERNAME_PROMPT_PATTERN: &str = r"(?i)username for";
const PASSWORD_PROMPT_PATTERN: &str = r"(?i)password for";

// An interactive push crosses the network and may wait on prompts
const PUSH_TIMEOUT_SECS: u64 = 300;

const PTY_ROWS: u16 = 24;
const PTY_COLS: u16 = 80;
const READ_POLL_INTERVAL_MS: u64 = 100;
const DRAIN_INTERVAL_MS: u64 = 50;

/// Credentials supplied to interactive username/password prompts
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One prompt pattern and the line written in reply when it appears
pub(crate) struct PromptResponder {
    pattern: Regex,
    reply: String,
    /// Secret replies are redacted from the returned transcript
    secret: bool,
}

impl PromptResponder {
    pub(crate) fn new(pattern: &str, reply: &str, secret: bool) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).context("Invalid prompt pattern")?,
            reply: reply.to_string(),
            secret,
        })
    }
}

/// Result of an interactive invocation: exit success plus the captured
/// transcript (stdout and stderr interleaved, as seen on the terminal)
#[derive(Clone, Debug)]
pub struct InteractiveOutcome {
    pub success: bool,
    pub transcript: String,
}

/// Pushes all branches to `label`, answering credential prompts with the
/// supplied username and password.
pub async fn push_all_branches(
    path: &Path,
    label: &str,
    credentials: &Credentials,
) -> Result<InteractiveOutcome> {
    let responders = vec![
        PromptResponder::new(USERNAME_PROMPT_PATTERN, &credentials.username, false)?,
        PromptResponder::new(PASSWORD_PROMPT_PATTERN, &credentials.password, true)?,
    ];

    let path = path.to_path_buf();
    let label = label.to_string();

    // The PTY read loop is blocking; keep it off the async worker threads.
    tokio::task::spawn_blocking(move || {
        run_interactive(
            &path,
            "git",
            &["push", "--all", &label],
            responders,
            Duration::from_secs(PUSH_TIMEOUT_SECS),
        )
    })
    .await
    .context("Interactive push task panicked")?
}

/// Spawns `program` under a PTY in `dir` and drives its prompts.
///
/// Output is accumulated into a transcript; whenever a responder's pattern
/// matches past its previous match position, the reply line is written to
/// the child. If the child neither exits nor produces output before the
/// deadline, it is killed and the invocation reported as failed.
pub(crate) fn run_interactive(
    dir: &Path,
    program: &str,
    args: &[&str],
    responders: Vec<PromptResponder>,
    timeout: Duration,
) -> Result<InteractiveOutcome> {
    let pty_system = native_pty_system();
    let PtyPair { master, slave } = pty_system
        .openpty(PtySize {
            rows: PTY_ROWS,
            cols: PTY_COLS,
            pixel_width: 0,
            pixel_height: 0,
        })
        .context("Failed to create PTY")?;

    let mut cmd = CommandBuilder::new(program);
    cmd.args(args);
    cmd.cwd(dir);

    let mut child = slave
        .spawn_command(cmd)
        .context("Failed to spawn command in PTY")?;
    // The master keeps the PTY open; the slave handle is no longer needed.
    drop(slave);

    let mut reader = master
        .try_clone_reader()
        .context("Failed to clone PTY reader")?;
    let mut writer = master.take_writer().context("Failed to take PTY writer")?;

    let (tx, rx) = mpsc::channel::<Vec<u8>>();
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let deadline = Instant::now() + timeout;
    let mut transcript = String::new();
    // Byte offset of each responder's last answered prompt
    let mut answered = vec![0usize; responders.len()];

    let status = loop {
        if let Some(status) = child.try_wait().context("Failed to poll child")? {
            // Drain whatever the child printed on its way out
            while let Ok(chunk) = rx.recv_timeout(Duration::from_millis(DRAIN_INTERVAL_MS)) {
                transcript.push_str(&String::from_utf8_lossy(&chunk));
            }
            break Some(status);
        }

        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            break None;
        }

        match rx.recv_timeout(Duration::from_millis(READ_POLL_INTERVAL_MS)) {
            Ok(chunk) => {
                transcript.push_str(&String::from_utf8_lossy(&chunk));
                for (i, responder) in responders.iter().enumerate() {
                    if let Some(m) = responder.pattern.find_at(&transcript, answered[i]) {
                        writer
                            .write_all(responder.reply.as_bytes())
                            .context("Failed to write prompt reply")?;
                        writer.write_all(b"\n").context("Failed to write prompt reply")?;
                        writer.flush().context("Failed to flush prompt reply")?;
                        answered[i] = m.end();
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let status = child.wait().context("Failed to wait for child")?;
                break Some(status);
            }
        }
    };

    // Never return secret replies, even if the terminal echoed them
    for responder in &responders {
        if responder.secret && !responder.reply.is_empty() {
            transcript = transcript.replace(&responder.reply, "********");
        }
    }

    match status {
        Some(status) => Ok(InteractiveOutcome {
            success: status.success(),
            transcript,
        }),
        None => Ok(InteractiveOutcome {
            success: false,
            transcript: format!(
                "{transcript}\n[timed out after {}s waiting for the push to finish]",
                timeout.as_secs()
            ),
        }),
    }
}
