// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vcs command implementation.

use std::time::Duration;

use tracing::info;

use crate::cli::vcs::{VcsArgs, VcsSubcommand};
use crate::config::Config;
use crate::error::Result;
use crate::vcs::GitWorkingCopy;

/// Main handler for the vcs command.
///
/// # Errors
///
/// Returns an error if the working copy cannot be discovered or any git
/// operation fails.
pub async fn run_vcs_command(args: &VcsArgs, config: &Config, dry_run: bool) -> Result<()> {
    match &args.subcommand {
        VcsSubcommand::Status(status) => {
            let copy = working_copy(config, &status.path)?;
            let staged = copy.has_changes().await?;
            println!(
                "{}: {}",
                copy.location().display(),
                if staged { "staged changes" } else { "clean index" }
            );
            Ok(())
        }
        VcsSubcommand::Update(update) => {
            let copy = working_copy(config, &update.path)?;
            let needs_revert = config.vcs.needs_revert && !update.no_revert;
            if dry_run {
                info!(
                    path = %copy.location().display(),
                    needs_revert,
                    "[dry-run] would update working copy"
                );
                return Ok(());
            }
            let output = copy.update(needs_revert).await?;
            print_output(&output);
            Ok(())
        }
        VcsSubcommand::Commit(commit) => {
            let copy = working_copy(config, &commit.path)?;
            let author = commit
                .author
                .as_deref()
                .or_else(|| (!config.vcs.author.is_empty()).then_some(config.vcs.author.as_str()));
            if dry_run {
                info!(
                    path = %copy.location().display(),
                    message = ?commit.message,
                    author = ?author,
                    "[dry-run] would commit and push"
                );
                return Ok(());
            }
            let output = copy
                .commit(commit.message.as_deref(), author, !commit.no_add)
                .await?;
            print_output(&output);
            Ok(())
        }
        VcsSubcommand::Show(show) => {
            let copy = working_copy(config, &show.path)?;
            let content = copy.clean_file(Some(&show.revision)).await?;
            print!("{content}");
            Ok(())
        }
    }
}

/// Discovers the working copy for `path`, applying the configured timeout.
fn working_copy(config: &Config, path: &std::path::Path) -> Result<GitWorkingCopy> {
    let mut copy = GitWorkingCopy::discover(path)?;
    if config.vcs.timeout_secs > 0 {
        copy = copy.with_timeout(Duration::from_secs(config.vcs.timeout_secs));
    }
    Ok(copy)
}

/// Prints subcommand output, skipping a trailing blank line.
fn print_output(output: &str) {
    let trimmed = output.trim_end();
    if !trimmed.is_empty() {
        println!("{trimmed}");
    }
}
