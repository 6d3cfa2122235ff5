// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text encoding conversion for file input and subprocess output.
//!
//! ```text
//! Store input          decode_text()
//!   BOM?  --> UTF-8 / UTF-16 (strict, errors surface)
//!   none  --> UTF-8 (strict)
//!
//! Process output       bytes_to_utf8()
//!   UTF-8 / CP1252 / UTF-16LE --> UTF-8 (lossy, U+FFFD)
//! ```
//!
//! Uses `encoding_rs`.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

/// Encoding types for subprocess output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Unknown encoding - treat as UTF-8 passthrough
    #[default]
    Unknown,
    /// UTF-8 (code page 65001)
    Utf8,
    /// UTF-16 Little Endian (code page 1200)
    Utf16Le,
    /// Active Code Page - typically Windows-1252
    Acp,
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD (replacement character).
/// This is the lossy path used for subprocess output, where a mangled
/// character must not fail the whole operation.
///
/// # Example
/// ```
/// use lokit::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9"; // "café" in Windows-1252
/// let utf8 = bytes_to_utf8(Encoding::Acp, cp1252_bytes);
/// assert_eq!(utf8, "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 | Encoding::Unknown => String::from_utf8_lossy(bytes),
        Encoding::Utf16Le => utf16_le_to_utf8(bytes),
        Encoding::Acp => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Converts UTF-16 LE bytes to UTF-8.
fn utf16_le_to_utf8(bytes: &[u8]) -> Cow<'static, str> {
    // Handle odd byte count by ignoring the last byte
    let len = bytes.len() & !1;
    if len == 0 {
        return Cow::Borrowed("");
    }

    let u16_slice: Vec<u16> = bytes[..len]
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    Cow::Owned(String::from_utf16_lossy(&u16_slice))
}

/// Why strict decoding of file content failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Name of the encoding that was attempted.
    pub encoding: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

/// Decodes the raw bytes of a translation file to UTF-8 text.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding and is stripped
/// from the result. Without a BOM the bytes must be valid UTF-8; invalid
/// sequences are an error here, not replaced - a translation file with
/// broken text should fail loudly rather than silently corrupt values.
///
/// # Errors
///
/// Returns a [`DecodeFailure`] naming the attempted encoding when the bytes
/// contain sequences that are invalid in it.
pub fn decode_text(bytes: &[u8]) -> std::result::Result<String, DecodeFailure> {
    if let Some((encoding, _bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if had_errors {
            return Err(DecodeFailure {
                encoding: encoding.name(),
                message: "malformed byte sequence".to_string(),
            });
        }
        return Ok(text.into_owned());
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(e) => Err(DecodeFailure {
            encoding: "UTF-8",
            message: format!("invalid byte sequence at offset {}", e.valid_up_to()),
        }),
    }
}
