// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for lokit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. lokit.toml (cwd)
//! 3. --config files
//! 4. LOKIT_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! LOKIT_GLOBAL_DRY=true      → global.dry = true
//! LOKIT_STORE_DIALECT=inno   → store.dialect = "inno"
//! LOKIT_VCS_AUTHOR=...       → vcs.author = "..."
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, StoreConfig, VcsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Translation store options.
    pub store: StoreConfig,
    /// Version-control options.
    pub vcs: VcsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lokit::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("lokit.toml")
    ///     .with_env_prefix("LOKIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options, deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_store_options(&mut options);
        self.format_vcs_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_store_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("store.dialect".into(), self.store.dialect.clone());
        options.insert("store.extension".into(), self.store.extension.clone());
    }

    fn format_vcs_options(&self, options: &mut BTreeMap<String, String>) {
        if !self.vcs.author.is_empty() {
            options.insert("vcs.author".into(), self.vcs.author.clone());
        }
        options.insert(
            "vcs.timeout_secs".into(),
            self.vcs.timeout_secs.to_string(),
        );
        options.insert(
            "vcs.needs_revert".into(),
            self.vcs.needs_revert.to_string(),
        );
    }
}
