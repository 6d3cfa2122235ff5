// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::which("git")
//!   .args() .cwd() .env_var() .capture_output() .timeout()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr to tracing
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
