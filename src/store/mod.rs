// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation store module.
//!
//! ```text
//!        Public API
//!   ini.rs   dialect.rs
//!      |         |
//!      v         v
//!  IniFile   DialectRegistry
//!  units     default / inno
//!      |
//!      v
//!  document.rs
//!  IniDocument (ordered, comment-preserving)
//! ```
//!
//! A translation store owns an ordered list of [`TranslationUnit`]s
//! extracted from a document. Each unit records where its value lives via a
//! structured [`Location`]; the display form `[section]entry` only exists at
//! the human-facing boundary (CLI output, JSON records) and is parsed back
//! with [`Location::from_str`].

pub mod dialect;
pub mod document;
pub mod ini;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::StoreError;

/// Pattern for the textual location form `[section]entry`.
fn location_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\[(?P<section>.+)\](?P<entry>.+)$").unwrap_or_else(|_| unreachable!())
    })
}

/// Coordinate of a translatable value inside an INI document.
///
/// Carried as a structured pair; `[section]entry` is derived for display
/// only, which keeps section names containing `]` unambiguous internally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    section: String,
    entry: String,
}

impl Location {
    /// Creates a location from its structured parts.
    pub fn new(section: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            entry: entry.into(),
        }
    }

    /// Returns the section name.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the entry (key) name.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{}", self.section, self.entry)
    }
}

impl FromStr for Location {
    type Err = StoreError;

    /// Parses the display form `[section]entry`.
    ///
    /// The section capture is greedy, so `[a]b]c` resolves to section
    /// `a]b`, entry `c`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LocationSyntax`] when the string does not
    /// match the bracket pattern.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let captures = location_pattern()
            .captures(s)
            .ok_or_else(|| StoreError::LocationSyntax {
                location: s.to_string(),
            })?;
        Ok(Self {
            section: captures["section"].to_string(),
            entry: captures["entry"].to_string(),
        })
    }
}

/// One translatable key/value pair extracted from a document.
///
/// `target` starts out equal to `source` and is edited by the translation
/// workflow; serialization writes the target back to the unit's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    source: String,
    target: String,
    location: Location,
}

impl TranslationUnit {
    /// Creates a unit whose target defaults to the source text.
    pub fn new(source: impl Into<String>, location: Location) -> Self {
        let source = source.into();
        Self {
            target: source.clone(),
            source,
            location,
        }
    }

    /// Returns the original value.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the (possibly edited) value to serialize.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Replaces the target value.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    /// Returns the unit's location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns true once the target diverges from the source.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.target != self.source
    }
}
