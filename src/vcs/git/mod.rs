// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git working-copy adapter.
//!
//! ```text
//! GitWorkingCopy::discover(file)
//!   gix scans parents for .git --> root_dir + relative location
//!
//! Operations (git CLI, --git-dir pinned, cwd = root):
//!   has_changes   diff --cached --exit-code   (non-zero => true)
//!   update        [checkout <path>] + pull
//!   add           add <files...> + commit(add=false)
//!   commit        [add <path>] + commit [-m][--author] + push
//!   clean_file    show <rev>:<path>
//! ```
//!
//! Strict fail-fast wrapper: every non-zero exit becomes a
//! [`VcsError::CommandFailed`] carrying the command line and captured
//! stderr (stdout when stderr is empty). No retries, no rollback - a push
//! failure surfaces after the local commit already succeeded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{Result, VcsError};

/// Name of the git metadata directory.
const METADIR: &str = ".git";

/// Checks whether the `git` binary is installed and runnable.
pub async fn is_available() -> bool {
    let Ok(builder) = ProcessBuilder::which("git") else {
        return false;
    };
    builder
        .arg("--version")
        .quiet()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .is_ok_and(|output| output.success())
}

/// Handle on one tracked path inside a git working copy.
///
/// All operations pass the repository's metadata directory explicitly via
/// `--git-dir` and run with the working-copy root as the current directory,
/// never relying on the ambient working directory.
#[derive(Debug, Clone)]
pub struct GitWorkingCopy {
    /// Working-copy root (the directory containing `.git`).
    root_dir: PathBuf,
    /// Tracked path, relative to `root_dir`.
    location: PathBuf,
    /// Per-subprocess timeout; `None` waits indefinitely.
    timeout: Option<Duration>,
}

impl GitWorkingCopy {
    /// Creates a handle from an already-known root and relative path.
    pub fn new(root_dir: impl Into<PathBuf>, location: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            location: location.into(),
            timeout: None,
        }
    }

    /// Locates the working copy containing `path` by scanning parent
    /// directories for `.git` metadata (via gix, no subprocess).
    ///
    /// # Errors
    ///
    /// Returns [`VcsError::NotAWorkingCopy`] when no repository is found or
    /// the repository has no work tree.
    pub fn discover(path: &Path) -> Result<Self> {
        let probe = if path.is_dir() {
            path
        } else {
            path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."))
        };

        let repo = gix::discover(probe).map_err(|e| VcsError::Discover(Box::new(e)))?;
        let root_dir = repo
            .workdir()
            .ok_or_else(|| VcsError::NotAWorkingCopy {
                path: path.display().to_string(),
            })?
            .to_path_buf();

        // Canonicalize both sides so the prefix strip works with relative
        // input paths and symlinked temp directories.
        let canonical_root = root_dir.canonicalize().unwrap_or_else(|_| root_dir.clone());
        let canonical_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let location = canonical_path
            .strip_prefix(&canonical_root)
            .map_err(|_| VcsError::NotAWorkingCopy {
                path: path.display().to_string(),
            })?
            .to_path_buf();

        debug!(
            root = %canonical_root.display(),
            location = %location.display(),
            "discovered working copy"
        );

        Ok(Self::new(canonical_root, location))
    }

    /// Sets a timeout applied to every git subprocess.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the working-copy root.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Returns the tracked path relative to the root.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Checks whether the index holds staged changes.
    ///
    /// Runs `diff --cached --exit-code`; per git convention a non-zero exit
    /// means differences exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the git subprocess cannot be spawned.
    pub async fn has_changes(&self) -> Result<bool> {
        let (output, _) = self.run_git(&["diff", "--cached", "--exit-code"]).await?;
        Ok(!output.success())
    }

    /// Cleanly updates the tracked path.
    ///
    /// With `needs_revert`, first checks out the tracked path to discard
    /// local edits; always pulls afterwards. Returns the concatenated
    /// subcommand output.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError::CommandFailed`] if either step exits non-zero.
    pub async fn update(&self, needs_revert: bool) -> Result<String> {
        let mut output_checkout = String::new();
        if needs_revert {
            let location = self.location_str()?;
            info!(path = %location, "reverting local edits");
            output_checkout = self.run_checked(&["checkout", location]).await?;
        }

        info!(root = %self.root_dir.display(), "pulling");
        let output_pull = self.run_checked(&["pull"]).await?;
        Ok(output_checkout + &output_pull)
    }

    /// Stages the given files, then commits (and pushes) them.
    ///
    /// Staging already happened here, so the commit step runs with
    /// `add = false`. Returns the concatenated output of all steps.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError::CommandFailed`] if staging fails, or any error
    /// out of [`commit`](Self::commit).
    pub async fn add(
        &self,
        files: &[PathBuf],
        message: Option<&str>,
        author: Option<&str>,
    ) -> Result<String> {
        let mut args = vec!["add".to_string()];
        for file in files {
            args.push(file.to_string_lossy().into_owned());
        }
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        info!(count = files.len(), "staging files");
        let output_add = self.run_checked(&arg_refs).await?;

        let output_commit = self.commit(message, author, false).await?;
        Ok(output_add + &output_commit)
    }

    /// Commits the tracked path and pushes the result.
    ///
    /// With `add`, the tracked path is staged first. Fails with
    /// [`VcsError::NothingToCommit`] when the cached diff shows no staged
    /// changes - `git commit` is never invoked in that case. On commit
    /// success the push runs immediately; a push failure is raised after
    /// the local commit already stands. Returns the concatenated output of
    /// the add, commit and push steps.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError::NothingToCommit`] or [`VcsError::CommandFailed`].
    pub async fn commit(
        &self,
        message: Option<&str>,
        author: Option<&str>,
        add: bool,
    ) -> Result<String> {
        let mut output_add = String::new();
        if add {
            let location = self.location_str()?;
            output_add = self.run_checked(&["add", location]).await?;
        }

        if !self.has_changes().await? {
            return Err(VcsError::NothingToCommit {
                path: self.root_dir.display().to_string(),
            }
            .into());
        }

        let mut args = vec!["commit"];
        if let Some(message) = message {
            args.extend(["-m", message]);
        }
        if let Some(author) = author {
            args.extend(["--author", author]);
        }

        info!(root = %self.root_dir.display(), "committing");
        let output_commit = self.run_checked(&args).await?;

        info!(root = %self.root_dir.display(), "pushing");
        let output_push = self.run_checked(&["push"]).await?;

        Ok(output_add + &output_commit + &output_push)
    }

    /// Fetches the committed content of the tracked path at `revision`
    /// (`HEAD` by default) via `git show`, returned exactly as emitted.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError::CommandFailed`] if the path does not exist at
    /// that revision or the subprocess exits non-zero for any other reason.
    pub async fn clean_file(&self, revision: Option<&str>) -> Result<String> {
        let revision = revision.unwrap_or("HEAD");
        let spec = format!("{revision}:{}", self.location_str()?);
        self.run_checked(&["show", spec.as_str()]).await
    }

    /// The tracked path as a UTF-8 argument.
    fn location_str(&self) -> Result<&str> {
        self.location.to_str().map_or_else(
            || {
                Err(VcsError::CommandFailed {
                    command: "git".to_string(),
                    message: format!("invalid file path {}", self.location.display()),
                }
                .into())
            },
            Ok,
        )
    }

    /// Runs one git subcommand, returning its raw output and the command
    /// line used (for error reporting).
    async fn run_git(&self, args: &[&str]) -> Result<(ProcessOutput, String)> {
        let git_dir = self.root_dir.join(METADIR);
        let mut builder = ProcessBuilder::which("git")?
            .arg("--git-dir")
            .arg(&git_dir)
            .args(args)
            .cwd(&self.root_dir)
            .env_var("GCM_INTERACTIVE", "never")
            .env_var("GIT_TERMINAL_PROMPT", "0")
            .capture_output()
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let command = builder.command_line();
        let output = builder.run().await?;
        Ok((output, command))
    }

    /// Runs one git subcommand and converts a non-zero exit into a
    /// [`VcsError::CommandFailed`]. Returns captured stdout.
    async fn run_checked(&self, args: &[&str]) -> Result<String> {
        let (output, command) = self.run_git(args).await?;
        if output.success() {
            return Ok(output.stdout().to_string());
        }

        // Prefer stderr; some git subcommands report errors on stdout only.
        let message = if output.stderr().trim().is_empty() {
            output.stdout().trim().to_string()
        } else {
            output.stderr().trim().to_string()
        };
        Err(VcsError::CommandFailed { command, message }.into())
    }
}

#[cfg(test)]
mod tests;
