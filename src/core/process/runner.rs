// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, cwd, env, stdio
//!   |
//!   v
//! spawn() --> reader tasks (stdout/stderr)
//!   |
//!   v
//! wait (kill on timeout)
//!   |
//!   v
//! validate exit_code
//! (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use crate::error::{ProcessError, Result};
use anyhow::Context;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, error, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::utility::encoding::bytes_to_utf8;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging and errors).
    pub(crate) fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                use std::fmt::Write as _;
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                use std::fmt::Write as _;
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// This is the main entry point for executing a process.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exceeds the configured timeout.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag
    ///   is not set).
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        // Build the tokio Command
        let mut command = self.build_command();

        // Spawn the process
        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn: {cmd_line}"))?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let exit_status = if let Some(timeout_duration) = self.timeout_duration() {
            tokio::select! {
                status = child.wait() => status?,
                () = tokio::time::sleep(timeout_duration) => {
                    warn!(process = %name, timeout = ?timeout_duration, "Process timed out");
                    child
                        .kill()
                        .await
                        .with_context(|| format!("failed to kill process {name}"))?;
                    return Err(ProcessError::Timeout {
                        command: cmd_line,
                        timeout_secs: timeout_duration.as_secs(),
                    }
                    .into());
                }
            }
        } else {
            child.wait().await?
        };

        let stdout = self
            .collect_stream(&name, "stdout", self.stdout_config(), stdout_reader)
            .await;
        let stderr = self
            .collect_stream(&name, "stderr", self.stderr_config(), stderr_reader)
            .await;

        let output = ProcessOutput::new(exit_status.code().unwrap_or(-1), stdout, stderr);

        // Check exit code
        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE)
            && !self.success_code_set().contains(&output.exit_code())
        {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            anyhow::bail!(
                "{} exited with code {} (expected one of {:?})",
                name,
                output.exit_code(),
                self.success_code_set()
            );
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        // Arguments
        command.args(self.args_slice());

        // Working directory
        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        // Extra environment variables on top of the inherited environment
        for (key, value) in self.env_vars() {
            command.env(key, value);
        }

        // No interactive input
        command.stdin(Stdio::null());

        // Stdout / stderr
        command.stdout(Self::stdio_from_flags(self.stdout_config().flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_config().flags()));

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }

    /// Awaits a stream reader and decodes its bytes.
    ///
    /// The raw text is preserved byte-for-byte (minus encoding conversion):
    /// callers like `git show` rely on the exact content, including trailing
    /// newlines.
    async fn collect_stream(
        &self,
        process_name: &str,
        stream_name: &str,
        config: &super::builder::StreamConfig,
        reader: Option<JoinHandle<Vec<u8>>>,
    ) -> String {
        let Some(reader) = reader else {
            return String::new();
        };
        let bytes = reader.await.unwrap_or_default();
        let text = bytes_to_utf8(config.encoding(), &bytes).into_owned();

        if config.flags().contains(StreamFlags::FORWARD_TO_LOG) {
            for line in text.lines() {
                trace!(process = %process_name, stream = %stream_name, line = %line, "output");
            }
        }

        if config.flags().contains(StreamFlags::KEEP_IN_STRING) {
            text
        } else {
            String::new()
        }
    }
}

/// Spawns a task that drains a child stream to a byte buffer.
///
/// Draining must happen concurrently with `wait()`, otherwise a chatty
/// child can fill the pipe and deadlock.
fn spawn_reader<R>(stream: Option<R>) -> Option<JoinHandle<Vec<u8>>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    stream.map(|mut stream| {
        tokio::spawn(async move {
            let mut bytes = Vec::new();
            let _ = stream.read_to_end(&mut bytes).await;
            bytes
        })
    })
}
