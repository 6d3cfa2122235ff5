// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::IniFile;
use crate::store::Location;
use crate::store::dialect::DialectRegistry;
use std::fs;
use tempfile::TempDir;

fn registry() -> DialectRegistry {
    DialectRegistry::builtin()
}

fn parse(content: &str, dialect: &str) -> IniFile {
    let mut store = IniFile::new(&registry(), dialect);
    store
        .parse_bytes(content.as_bytes())
        .expect("parse should succeed");
    store
}

fn serialize(store: &mut IniFile) -> String {
    let mut out = Vec::new();
    store.serialize(&mut out).expect("serialize should succeed");
    String::from_utf8(out).expect("serialized output is UTF-8")
}

#[test]
fn test_parse_two_units_default_dialect() {
    let store = parse("[Section]\na = hello\nb : world\n", "default");
    let units = store.units();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].source(), "hello");
    assert_eq!(units[0].location().to_string(), "[Section]a");
    assert_eq!(units[1].source(), "world");
    assert_eq!(units[1].location().to_string(), "[Section]b");
}

#[test]
fn test_unit_count_and_order_across_sections() {
    let store = parse(
        "[One]\na = 1\nb = 2\n\n[Two]\nc = 3\n\n[Three]\nd = 4\ne = 5\nf = 6\n",
        "default",
    );
    let locations: Vec<_> = store
        .units()
        .iter()
        .map(|u| u.location().to_string())
        .collect();
    assert_eq!(
        locations,
        vec!["[One]a", "[One]b", "[Two]c", "[Three]d", "[Three]e", "[Three]f"]
    );
}

#[test]
fn test_inno_dialect_unescapes_sources() {
    let store = parse("[S]\nmsg = line1%nline2%tend\n", "inno");
    assert_eq!(store.units()[0].source(), "line1\nline2\tend");
}

#[test]
fn test_unknown_dialect_falls_back_to_default() {
    let store = parse("[S]\nmsg = a%nb\n", "no-such-dialect");
    assert_eq!(store.dialect_name(), "default");
    // Identity dialect: the escape sequence stays literal
    assert_eq!(store.units()[0].source(), "a%nb");
}

#[test]
fn test_serialize_unedited_is_byte_identical() {
    let content = "# comment\n; another\n\n[Section]\na = hello\nb : world\n";
    let mut store = parse(content, "default");
    assert_eq!(serialize(&mut store), content);
}

#[test]
fn test_serialize_twice_is_idempotent() {
    let content = "[Section]\na = hello\n";
    let mut store = parse(content, "default");
    store.units_mut()[0].set_target("bonjour");
    let first = serialize(&mut store);
    let second = serialize(&mut store);
    assert_eq!(first, second);
    assert_eq!(first, "[Section]\na = bonjour\n");
}

#[test]
fn test_serialize_inno_escapes_target() {
    let mut store = parse("[Section]\na = hello\nb : world\n", "inno");
    store.units_mut()[0].set_target("line1\nline2");
    let output = serialize(&mut store);
    assert_eq!(output, "[Section]\na = line1%nline2\nb : world\n");
}

#[test]
fn test_serialize_preserves_comments_and_order() {
    let content = "\
; file header

[General]
# greeting shown at startup
greeting = Hello
farewell = Bye

[Menu]
open = Open
";
    let mut store = parse(content, "default");
    store
        .unit_at_mut(&Location::new("General", "farewell"))
        .expect("unit exists")
        .set_target("Adieu");
    let output = serialize(&mut store);
    assert_eq!(output, content.replace("farewell = Bye", "farewell = Adieu"));
}

#[test]
fn test_empty_store_ready_for_later_parse() {
    let mut store = IniFile::new(&registry(), "default");
    assert!(store.units().is_empty());
    assert_eq!(store.filename(), "");

    store.parse_bytes(b"[S]\nk = v\n").unwrap();
    assert_eq!(store.units().len(), 1);
}

#[test]
fn test_parse_reader_retains_filename() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.ini");
    fs::write(&path, "[S]\nk = v\n").unwrap();

    let mut store = IniFile::open(&path, &registry(), "default").unwrap();
    assert!(store.filename().ends_with("app.ini"));

    // Re-parsing from a nameless reader keeps the display filename
    store
        .parse_reader("[S]\nk = w\n".as_bytes())
        .expect("reader parse should succeed");
    assert!(store.filename().ends_with("app.ini"));
    assert_eq!(store.units()[0].source(), "w");
}

#[test]
fn test_parse_path_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.ini");
    let err = IniFile::open(&missing, &registry(), "default").unwrap_err();
    assert!(matches!(err, crate::error::StoreError::Io { .. }));
}

#[test]
fn test_parse_invalid_utf8_is_decode_error() {
    let mut store = IniFile::new(&registry(), "default");
    let err = store.parse_bytes(b"[S]\nk = \xff\xfe\xff\n").unwrap_err();
    assert!(matches!(err, crate::error::StoreError::Decode { .. }));
}

#[test]
fn test_parse_utf8_bom_input() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"[S]\nk = v\n");
    let mut store = IniFile::new(&registry(), "default");
    store.parse_bytes(&bytes).unwrap();
    assert_eq!(store.units()[0].source(), "v");
}

#[test]
fn test_serialize_to_path_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.ini");
    fs::write(&path, "[S]\ngreeting = Hello\n").unwrap();

    let mut store = IniFile::open(&path, &registry(), "default").unwrap();
    store.units_mut()[0].set_target("Hallo");
    store.serialize_to_path(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[S]\ngreeting = Hallo\n");
}

#[test]
fn test_duplicate_keys_across_sections_become_two_units() {
    let store = parse("[A]\nkey = 1\n[B]\nkey = 2\n", "default");
    assert_eq!(store.units().len(), 2);
    assert_eq!(store.units()[0].location().to_string(), "[A]key");
    assert_eq!(store.units()[1].location().to_string(), "[B]key");
}
