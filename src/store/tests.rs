// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Location, TranslationUnit};
use crate::error::StoreError;

#[test]
fn test_location_display() {
    let loc = Location::new("Section", "key");
    insta::assert_snapshot!(loc.to_string(), @"[Section]key");
}

#[test]
fn test_location_parse_round_trip() {
    let loc: Location = "[Messages]greeting".parse().unwrap();
    assert_eq!(loc.section(), "Messages");
    assert_eq!(loc.entry(), "greeting");
    assert_eq!(loc.to_string(), "[Messages]greeting");
}

#[test]
fn test_location_parse_greedy_section() {
    // Bracket in the section name: the section capture is greedy
    let loc: Location = "[a]b]c".parse().unwrap();
    assert_eq!(loc.section(), "a]b");
    assert_eq!(loc.entry(), "c");
}

#[test]
fn test_location_parse_rejects_malformed() {
    for bad in ["Sectionkey", "[Section]", "[]key", "", "key[Section]"] {
        let err = bad.parse::<Location>().unwrap_err();
        assert!(
            matches!(err, StoreError::LocationSyntax { .. }),
            "expected LocationSyntax for {bad:?}"
        );
    }
}

#[test]
fn test_unit_target_defaults_to_source() {
    let unit = TranslationUnit::new("hello", Location::new("S", "a"));
    assert_eq!(unit.source(), "hello");
    assert_eq!(unit.target(), "hello");
    assert!(!unit.is_translated());
}

#[test]
fn test_unit_set_target() {
    let mut unit = TranslationUnit::new("hello", Location::new("S", "a"));
    unit.set_target("bonjour");
    assert_eq!(unit.source(), "hello");
    assert_eq!(unit.target(), "bonjour");
    assert!(unit.is_translated());
}
