// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extract and apply command implementations.
//!
//! ```text
//! extract: parse INI --> unit records --> stdout (text or JSON)
//! apply:   unit records (JSON) --> patch targets --> serialize
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cli::store::{ApplyArgs, ExtractArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::Location;
use crate::store::dialect::DialectRegistry;
use crate::store::ini::IniFile;
use crate::utility::fs::find_translation_files;

/// One translation unit at the JSON boundary.
///
/// The location travels in its `[section]entry` display form and is parsed
/// back into a structured [`Location`] on apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Display form of the unit's location.
    pub location: String,
    /// Original value.
    pub source: String,
    /// Edited value.
    pub target: String,
}

impl UnitRecord {
    fn from_unit(unit: &crate::store::TranslationUnit) -> Self {
        Self {
            location: unit.location().to_string(),
            source: unit.source().to_string(),
            target: unit.target().to_string(),
        }
    }
}

/// Main handler for the extract command.
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or a directory cannot be
/// scanned.
pub fn run_extract_command(args: &ExtractArgs, config: &Config) -> Result<()> {
    let registry = DialectRegistry::builtin();
    let dialect = args
        .dialect
        .as_deref()
        .unwrap_or(config.store.dialect.as_str());

    let files: Vec<PathBuf> = if args.path.is_dir() {
        find_translation_files(&args.path, &config.store.extension)?
    } else {
        vec![args.path.clone()]
    };

    let mut records = Vec::new();
    for file in &files {
        let store = IniFile::open(file, &registry, dialect)
            .with_context(|| format!("failed to parse {}", file.display()))?;
        info!(
            file = %file.display(),
            units = store.units().len(),
            "extracted units"
        );
        records.extend(store.units().iter().map(UnitRecord::from_unit));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}\t{}", record.location, record.source);
        }
    }

    Ok(())
}

/// Main handler for the apply command.
///
/// # Errors
///
/// Returns an error if the store or the translation records cannot be
/// read, a record's location string is malformed, or the result cannot be
/// written.
pub fn run_apply_command(args: &ApplyArgs, config: &Config, dry_run: bool) -> Result<()> {
    let registry = DialectRegistry::builtin();
    let dialect = args
        .dialect
        .as_deref()
        .unwrap_or(config.store.dialect.as_str());

    let mut store = IniFile::open(&args.path, &registry, dialect)
        .with_context(|| format!("failed to parse {}", args.path.display()))?;

    let records = read_records(&args.translations)?;

    let mut applied = 0usize;
    for record in &records {
        let location: Location = record.location.parse()?;
        match store.unit_at_mut(&location) {
            Some(unit) => {
                unit.set_target(record.target.clone());
                applied += 1;
            }
            None => warn!(location = %record.location, "no matching unit, skipped"),
        }
    }

    let output = args.output.as_deref().unwrap_or(&args.path);

    if dry_run {
        info!(
            output = %output.display(),
            applied,
            total = records.len(),
            "[dry-run] would write store"
        );
        return Ok(());
    }

    store
        .serialize_to_path(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        output = %output.display(),
        applied,
        total = records.len(),
        "applied translations"
    );
    Ok(())
}

/// Reads a JSON list of unit records.
fn read_records(path: &Path) -> Result<Vec<UnitRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid translation records in {}", path.display()))
}
