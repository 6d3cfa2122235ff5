// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for lokit.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, StoreConfig, VcsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem and version-control writes without making
    /// changes.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("lokit.log"),
        }
    }
}

/// Translation store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Dialect applied when none is given on the command line.
    /// Unknown names fall back to `default`.
    pub dialect: String,
    /// File extension scanned for when extracting from a directory.
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dialect: "default".to_string(),
            extension: "ini".to_string(),
        }
    }
}

/// Version-control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VcsConfig {
    /// Commit author (`Name <email>`); empty uses the repository default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
    /// Timeout in seconds for each git subprocess (0 = no timeout).
    pub timeout_secs: u64,
    /// Whether `update` discards local edits before pulling.
    pub needs_revert: bool,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            timeout_secs: 120,
            needs_revert: true,
        }
    }
}
