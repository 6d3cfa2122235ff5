// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()    BOM sniff + strict decode for store input
//!   bytes_to_utf8()  CP1252/UTF-16 --> UTF-8 (lossy, process output)
//! fs
//!   find_translation_files()  ignore::Walk, sorted results
//! ```

pub mod encoding;
pub mod fs;
