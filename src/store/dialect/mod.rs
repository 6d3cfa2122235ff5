// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value escaping dialects.
//!
//! ```text
//! DialectRegistry::builtin()
//!   "default" --> identity
//!   "inno"    --> \n <-> %n, \t <-> %t
//!
//! lookup(unknown) --> "default" (never an error)
//! ```
//!
//! The registry is an explicit table constructed at startup and passed by
//! reference into store constructors; there is no process-global state.
//! Unknown dialect names fall back to `default` silently - a typo'd name
//! means identity behavior, not a failure.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named pair of escape/unescape text transforms applied to values at
/// parse/serialize boundaries.
pub trait Dialect: std::fmt::Debug + Send + Sync {
    /// Registry name of this dialect.
    fn name(&self) -> &'static str;

    /// Converts a raw document value into source text.
    fn unescape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Converts target text back into a document value.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Identity dialect; values pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialectDefault;

impl Dialect for DialectDefault {
    fn name(&self) -> &'static str {
        "default"
    }

    fn unescape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Inno Setup style dialect: newline and tab travel as `%n` and `%t`.
///
/// The round trip is lossy for text that already contains literal `%n` or
/// `%t` sequences; that matches the format, not a defect here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialectInno;

impl Dialect for DialectInno {
    fn name(&self) -> &'static str {
        "inno"
    }

    fn unescape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains("%n") || text.contains("%t") {
            Cow::Owned(text.replace("%n", "\n").replace("%t", "\t"))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains('\n') || text.contains('\t') {
            Cow::Owned(text.replace('\t', "%t").replace('\n', "%n"))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Explicit dialect table, name to strategy.
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, Arc<dyn Dialect>>,
}

impl DialectRegistry {
    /// Creates a registry holding the built-in dialects.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self {
            dialects: BTreeMap::new(),
        };
        registry.register(Arc::new(DialectDefault));
        registry.register(Arc::new(DialectInno));
        registry
    }

    /// Adds a dialect under its own name, replacing any previous entry.
    pub fn register(&mut self, dialect: Arc<dyn Dialect>) {
        self.dialects.insert(dialect.name().to_string(), dialect);
    }

    /// Looks up a dialect by name, falling back to `default` for unknown
    /// names. Never errors.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Arc<dyn Dialect> {
        self.dialects
            .get(name)
            .or_else(|| self.dialects.get(DialectDefault.name()))
            .cloned()
            .unwrap_or_else(|| Arc::new(DialectDefault))
    }

    /// Returns the registered dialect names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(String::as_str)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
