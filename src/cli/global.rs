// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --dry             ← Simulate writes
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Write a trace log
//!
//! Precedence: env vars > --config > lokit.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Simulates writes: reports what would change without touching files
    /// or the repository.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
