// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vcs command arguments.
//!
//! # Subcommands
//!
//! ```text
//! vcs status PATH
//!   → report staged-change state of the working copy
//! vcs update PATH [--no-revert]
//!   → discard local edits (unless --no-revert), then pull
//! vcs commit PATH [-m MSG] [--author A] [--no-add]
//!   → stage, commit and push the tracked path
//! vcs show PATH [--revision R]
//!   → print the committed content of the path
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for the `vcs` command.
#[derive(Debug, Clone, Args)]
pub struct VcsArgs {
    /// Vcs subcommand.
    #[command(subcommand)]
    pub subcommand: VcsSubcommand,
}

/// Vcs subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum VcsSubcommand {
    /// Reports whether the working copy has staged changes.
    Status(StatusArgs),

    /// Does a clean update of the tracked path.
    Update(UpdateArgs),

    /// Commits the tracked path and pushes the result.
    Commit(CommitArgs),

    /// Prints the committed content of the tracked path.
    Show(ShowArgs),
}

/// Arguments for the status subcommand.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Tracked file inside a git working copy.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Arguments for the update subcommand.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Tracked file inside a git working copy.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Keep local edits instead of checking out the clean copy first.
    #[arg(long = "no-revert")]
    pub no_revert: bool,
}

/// Arguments for the commit subcommand.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Tracked file inside a git working copy.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Commit message.
    #[arg(short = 'm', long, value_name = "MSG")]
    pub message: Option<String>,

    /// Commit author (`Name <email>`); defaults to the configured author.
    #[arg(short = 'a', long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Commit whatever is already staged without staging the tracked path.
    #[arg(long = "no-add")]
    pub no_add: bool,
}

/// Arguments for the show subcommand.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Tracked file inside a git working copy.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Revision to read the file from.
    #[arg(short = 'r', long, value_name = "REV", default_value = "HEAD")]
    pub revision: String,
}
