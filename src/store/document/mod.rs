// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered, formatting-preserving INI document model.
//!
//! ```text
//! # comment          Verbatim
//! ; comment          Verbatim
//!                    Verbatim
//! [Section]          Header
//! key = value        Entry  (separator '=' or ':', spelling kept)
//! key : value        Entry
//! anything else      Verbatim
//! ```
//!
//! The document is a flat sequence of classified lines. Rendering emits
//! untouched lines byte-for-byte, so comments, blank lines, ordering and
//! unrecognized content survive a parse/patch/render cycle. Only entry
//! values are patchable.
//!
//! Line endings are normalized to LF; a missing final newline is preserved.

/// One classified line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Blank line, comment, or unrecognized content; rendered verbatim.
    /// Entries appearing before the first section header also land here -
    /// they have no `[section]entry` address.
    Verbatim(String),
    /// `[name]` section header; `raw` keeps the original spelling.
    Header { name: String, raw: String },
    /// Key/value entry. `prefix` holds the key text, the separator and the
    /// whitespace around it, so a patched value re-renders in the original
    /// style.
    Entry {
        key: String,
        prefix: String,
        value: String,
    },
}

/// In-memory INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl IniDocument {
    /// Parses document text into the line model. Never fails: anything that
    /// is not a recognizable header or entry passes through verbatim.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut in_section = false;

        for raw in text.lines() {
            let line = classify(raw, in_section);
            if matches!(line, Line::Header { .. }) {
                in_section = true;
            }
            lines.push(line);
        }

        Self {
            lines,
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Returns true when the document holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns section names in document order, duplicates included.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Header { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Returns `(section, key, value)` triples in document order.
    ///
    /// Within a section, duplicate keys are last-write-wins: only the final
    /// occurrence of a key is yielded, at its own position.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str, &str)> {
        let addressed = self.addressed_entries();
        let mut entries = Vec::with_capacity(addressed.len());
        for (i, (section, key, value)) in addressed.iter().enumerate() {
            // Skip entries shadowed by a later occurrence of the same key
            // in the same section.
            let shadowed = addressed[i + 1..]
                .iter()
                .any(|(s, k, _)| s == section && k == key);
            if !shadowed {
                entries.push((*section, *key, *value));
            }
        }
        entries
    }

    /// Returns the value at `(section, key)`, honoring last-write-wins.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.addressed_entries()
            .iter()
            .rev()
            .find(|(s, k, _)| *s == section && *k == key)
            .map(|(_, _, value)| *value)
    }

    /// Writes `value` at `(section, key)`.
    ///
    /// Patches the last matching entry in place. A missing key is appended
    /// at the end of the section's last block; a missing section is
    /// appended at the end of the document.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if let Some(index) = self.last_entry_index(section, key) {
            if let Line::Entry { value: slot, .. } = &mut self.lines[index] {
                *slot = value.to_string();
            }
            return;
        }

        if let Some(end) = self.section_block_end(section) {
            self.lines.insert(
                end,
                Line::Entry {
                    key: key.to_string(),
                    prefix: format!("{key} = "),
                    value: value.to_string(),
                },
            );
            return;
        }

        // Unknown section: append a fresh block.
        if !self.lines.is_empty() {
            self.lines.push(Line::Verbatim(String::new()));
        }
        self.lines.push(Line::Header {
            name: section.to_string(),
            raw: format!("[{section}]"),
        });
        self.lines.push(Line::Entry {
            key: key.to_string(),
            prefix: format!("{key} = "),
            value: value.to_string(),
        });
        self.trailing_newline = true;
    }

    /// Renders the document back to text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                Line::Verbatim(raw) | Line::Header { raw, .. } => out.push_str(raw),
                Line::Entry { prefix, value, .. } => {
                    out.push_str(prefix);
                    out.push_str(value);
                }
            }
            if i + 1 < self.lines.len() || self.trailing_newline {
                out.push('\n');
            }
        }
        out
    }

    /// All entries with their owning section, in physical order.
    fn addressed_entries(&self) -> Vec<(&str, &str, &str)> {
        let mut entries = Vec::new();
        let mut section: Option<&str> = None;
        for line in &self.lines {
            match line {
                Line::Header { name, .. } => section = Some(name.as_str()),
                Line::Entry { key, value, .. } => {
                    if let Some(section) = section {
                        entries.push((section, key.as_str(), value.as_str()));
                    }
                }
                Line::Verbatim(_) => {}
            }
        }
        entries
    }

    /// Index of the last entry line matching `(section, key)`.
    fn last_entry_index(&self, section: &str, key: &str) -> Option<usize> {
        let mut current: Option<&str> = None;
        let mut found = None;
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                Line::Header { name, .. } => current = Some(name.as_str()),
                Line::Entry { key: k, .. } => {
                    if current == Some(section) && k == key {
                        found = Some(i);
                    }
                }
                Line::Verbatim(_) => {}
            }
        }
        found
    }

    /// Insertion point just past the last non-blank line of the section's
    /// last block, or `None` if the section does not exist.
    fn section_block_end(&self, section: &str) -> Option<usize> {
        let mut current: Option<&str> = None;
        let mut end = None;
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                Line::Header { name, .. } => {
                    current = Some(name.as_str());
                    if current == Some(section) {
                        end = Some(i + 1);
                    }
                }
                Line::Entry { .. } => {
                    if current == Some(section) {
                        end = Some(i + 1);
                    }
                }
                Line::Verbatim(_) => {}
            }
        }
        end
    }
}

/// Classifies one raw line.
fn classify(raw: &str, in_section: bool) -> Line {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
        return Line::Verbatim(raw.to_string());
    }

    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        && !inner.is_empty()
    {
        return Line::Header {
            name: inner.to_string(),
            raw: raw.to_string(),
        };
    }

    // Entries are only addressable inside a section.
    if in_section
        && let Some(sep) = raw.find(['=', ':'])
    {
        let key = raw[..sep].trim();
        if !key.is_empty() {
            let after = &raw[sep + 1..];
            let value_start = after.len() - after.trim_start().len();
            return Line::Entry {
                key: key.to_string(),
                prefix: raw[..sep + 1 + value_start].to_string(),
                value: after.trim().to_string(),
            };
        }
    }

    Line::Verbatim(raw.to_string())
}
