// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options and configs command implementations.

use crate::config::Config;

/// Prints all configuration options with their effective values.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the list of loaded configuration files.
pub fn run_configs_command(loaded_files: &[String]) {
    if loaded_files.is_empty() {
        println!("No config files loaded, using defaults.");
        return;
    }
    for line in loaded_files {
        println!("{line}");
    }
}
