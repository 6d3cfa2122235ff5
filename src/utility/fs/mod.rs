// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for locating translation files.
//!
//! ```text
//! find_translation_files(root, "ini")
//!   ignore::WalkBuilder
//!   .gitignore aware, skips hidden entries
//!   --> sorted Vec<PathBuf>
//! ```

use crate::error::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Recursively find all files with the given extension under a directory.
///
/// Respects `.gitignore` files and skips hidden entries, so translation
/// files inside `.git/` or editor droppings never show up. Results are
/// sorted for deterministic ordering.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn find_translation_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && entry
                        .path()
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
                {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => warn!(error = %e, "walk error"),
        }
    }

    files.sort();
    Ok(files)
}
