// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! INI translation store.
//!
//! ```text
//! IniFile::open(path, &registry, "inno")
//!   |
//!   v
//! decode bytes (BOM aware, strict)
//!   |
//!   v
//! IniDocument::parse
//!   |
//!   v
//! one TranslationUnit per (section, entry), dialect-unescaped,
//! section-then-entry document order
//!
//! serialize(&mut out)
//!   escape targets --> patch document --> render --> write bytes
//! ```
//!
//! The store keeps the parsed document alongside its units; serialization
//! patches values back into the original structure so comments, ordering
//! and formatting of untouched lines survive.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::dialect::{Dialect, DialectRegistry};
use super::document::IniDocument;
use super::{Location, TranslationUnit};
use crate::error::StoreError;

/// An INI-format translation store.
#[derive(Debug)]
pub struct IniFile {
    filename: String,
    dialect: Arc<dyn Dialect>,
    document: IniDocument,
    units: Vec<TranslationUnit>,
}

impl IniFile {
    /// Creates an empty store with the given dialect.
    ///
    /// Unknown dialect names fall back to `default`. The store is ready for
    /// a later `parse_*` call.
    #[must_use]
    pub fn new(registry: &DialectRegistry, dialect: &str) -> Self {
        Self {
            filename: String::new(),
            dialect: registry.lookup(dialect),
            document: IniDocument::default(),
            units: Vec::new(),
        }
    }

    /// Creates a store and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be read or decoded.
    pub fn open(
        path: &Path,
        registry: &DialectRegistry,
        dialect: &str,
    ) -> std::result::Result<Self, StoreError> {
        let mut store = Self::new(registry, dialect);
        store.parse_path(path)?;
        Ok(store)
    }

    /// Parses the file at `path`, adopting it as the display filename.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be read or decoded.
    pub fn parse_path(&mut self, path: &Path) -> std::result::Result<(), StoreError> {
        self.filename = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_bytes(&bytes)
    }

    /// Fully reads `input` and parses its content.
    ///
    /// The reader carries no name, so any previously set display filename
    /// is retained. The reader is consumed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if reading or decoding fails.
    pub fn parse_reader(&mut self, mut input: impl Read) -> std::result::Result<(), StoreError> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|source| StoreError::Io {
                path: self.filename.clone().into(),
                source,
            })?;
        self.parse_bytes(&bytes)
    }

    /// Parses raw byte content.
    ///
    /// Bytes are decoded as UTF-8 (or per a UTF-8/UTF-16 BOM), then handed
    /// to the document model. Units are rebuilt from scratch: one per
    /// `(section, entry)` pair, in section-then-entry document order, with
    /// the dialect's unescape applied to each raw value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] for undecodable bytes.
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> std::result::Result<(), StoreError> {
        let text = crate::utility::encoding::decode_text(bytes).map_err(|failure| {
            StoreError::Decode {
                filename: self.filename.clone(),
                encoding: failure.encoding,
                message: failure.message,
            }
        })?;

        self.document = IniDocument::parse(&text);
        self.units = self
            .document
            .entries()
            .into_iter()
            .map(|(section, entry, value)| {
                TranslationUnit::new(
                    self.dialect.unescape(value).into_owned(),
                    Location::new(section, entry),
                )
            })
            .collect();

        debug!(
            filename = %self.filename,
            units = self.units.len(),
            dialect = self.dialect.name(),
            "parsed store"
        );
        Ok(())
    }

    /// Serializes the store into `out`.
    ///
    /// Every unit's target is escaped with the active dialect and written
    /// back into the document at the unit's location, mutating the document
    /// in place; the full document then renders with original formatting
    /// for untouched parts. Serializing again without edits is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if writing to `out` fails.
    pub fn serialize(&mut self, out: &mut impl Write) -> std::result::Result<(), StoreError> {
        for unit in &self.units {
            let location = unit.location();
            let value = self.dialect.escape(unit.target());
            self.document
                .set(location.section(), location.entry(), &value);
        }

        out.write_all(self.document.render().as_bytes())
            .map_err(|source| StoreError::Io {
                path: self.filename.clone().into(),
                source,
            })
    }

    /// Serializes the store back to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn serialize_to_path(&mut self, path: &Path) -> std::result::Result<(), StoreError> {
        let mut bytes = Vec::new();
        self.serialize(&mut bytes)?;
        std::fs::write(path, bytes).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the display filename (empty when parsed from bytes).
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the active dialect's name.
    #[must_use]
    pub fn dialect_name(&self) -> &'static str {
        self.dialect.name()
    }

    /// Returns the units in document order.
    #[must_use]
    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    /// Returns the units mutably, for target editing.
    pub fn units_mut(&mut self) -> &mut [TranslationUnit] {
        &mut self.units
    }

    /// Finds a unit by location.
    #[must_use]
    pub fn unit_at(&self, location: &Location) -> Option<&TranslationUnit> {
        self.units.iter().find(|unit| unit.location() == location)
    }

    /// Finds a unit by location, mutably.
    pub fn unit_at_mut(&mut self, location: &Location) -> Option<&mut TranslationUnit> {
        self.units
            .iter_mut()
            .find(|unit| unit.location() == location)
    }
}

#[cfg(test)]
mod tests;
