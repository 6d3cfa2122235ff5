// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for lokit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! lokit [global options] <command>
//! extract PATH [--dialect D] [--json]
//! apply PATH --translations FILE [--output OUT]
//! vcs {status|update|commit|show} PATH
//! options
//! configs
//! ```

pub mod global;
pub mod store;
pub mod vcs;


use crate::cli::global::GlobalOptions;
use crate::cli::store::{ApplyArgs, ExtractArgs};
use crate::cli::vcs::VcsArgs;
use clap::{Parser, Subcommand};

/// Localization Toolkit
///
/// Manages INI-format translation files and keeps them under git version
/// control.
#[derive(Debug, Parser)]
#[command(
    name = "lokit",
    author,
    version,
    about = "Localization Toolkit",
    long_about = "lokit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Manages INI-format translation files: extracts translatable\n\
                  units, applies edited translations back without disturbing\n\
                  comments or formatting, and drives the git working copy the\n\
                  files live in. See `lokit <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, lokit looks for `lokit.toml` in the current\n\
                  directory. Additional TOML files can be specified with\n\
                  --config; later files override earlier ones, and LOKIT_*\n\
                  environment variables override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by lokit.
    Configs,

    /// Extracts translation units from INI files.
    Extract(ExtractArgs),

    /// Applies edited translations back into an INI file.
    Apply(ApplyArgs),

    /// Drives the git working copy of translation files.
    Vcs(VcsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
