// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              LokitError (~24 bytes)
//!                     |
//!      +--------+-----+-----+--------+
//!      |        |     |     |        |
//!      v        v     v     v        v
//!    Store     Vcs   Cfg  Proc   Io/Other
//!     Box      Box   Box   Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Store   Decode, LocationSyntax, Io
//!   Vcs     CommandFailed, NothingToCommit, NotAWorkingCopy
//!   Config  ParseError, MissingKey, InvalidValue
//!   Process SpawnFailed, NonZeroExit, Timeout
//!
//! All variants boxed => LokitError fits in 24 bytes.
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LokitError`].
pub type LokitResult<T> = std::result::Result<T, LokitError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum LokitError {
    /// Translation store error.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Version-control operation failed.
    #[error("vcs error: {0}")]
    Vcs(#[from] Box<VcsError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LokitError {
                fn from(err: $error) -> Self {
                    LokitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    VcsError => Vcs,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Store Errors ---

/// Translation store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input bytes are not valid text in a supported encoding.
    #[error("invalid {encoding} in '{filename}': {message}")]
    Decode {
        filename: String,
        encoding: &'static str,
        message: String,
    },

    /// A location string does not match the `[section]entry` pattern.
    #[error("malformed unit location '{location}' (expected '[section]entry')")]
    LocationSyntax { location: String },

    /// I/O failure while reading or writing a store.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Vcs Errors ---

/// Version-control adapter errors.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The path is not inside a git working copy.
    #[error("no git working copy found for '{path}'")]
    NotAWorkingCopy { path: String },

    /// A git subcommand exited non-zero.
    ///
    /// `message` carries captured stderr, falling back to stdout when
    /// stderr was empty.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Commit was requested but the index holds no staged changes.
    #[error("no changes to commit in '{path}'")]
    NothingToCommit { path: String },

    /// Repository discovery via gix failed.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}
