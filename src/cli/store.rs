// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store command arguments.
//!
//! # Subcommands
//!
//! ```text
//! extract PATH [--dialect D] [--json]
//!   → list units of a file, or of every translation file under a directory
//! apply PATH --translations FILE [--dialect D] [--output OUT]
//!   → patch targets from a JSON record list and re-serialize
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `extract` command.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// INI file, or a directory to scan for translation files.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Escaping dialect to apply; unknown names fall back to 'default'.
    #[arg(short = 'd', long, value_name = "NAME")]
    pub dialect: Option<String>,

    /// Emit units as JSON records instead of tab-separated text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `apply` command.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// INI file to patch.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// JSON file with `{location, source, target}` records, as produced by
    /// `extract --json`.
    #[arg(short = 't', long, value_name = "FILE", required = true)]
    pub translations: PathBuf,

    /// Escaping dialect to apply; unknown names fall back to 'default'.
    #[arg(short = 'd', long, value_name = "NAME")]
    pub dialect: Option<String>,

    /// Write the result here instead of patching the input in place.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
