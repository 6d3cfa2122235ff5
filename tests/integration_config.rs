// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.

use lokit::config::Config;
use std::fs;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn config_from_file() {
    let temp = temp_dir();
    let path = temp.path().join("lokit.toml");
    fs::write(
        &path,
        r#"
        [store]
        dialect = "inno"
        extension = "isl"

        [vcs]
        author = "CI Bot <ci@example.com>"
        "#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.store.dialect, "inno");
    assert_eq!(config.store.extension, "isl");
    assert_eq!(config.vcs.author, "CI Bot <ci@example.com>");
    // Defaults fill the rest
    assert!(!config.global.dry);
    assert_eq!(config.vcs.timeout_secs, 120);
}

#[test]
fn config_missing_required_file_fails() {
    let temp = temp_dir();
    let missing = temp.path().join("nope.toml");
    assert!(Config::from_file(&missing).is_err());
}

#[test]
fn config_optional_file_missing_is_fine() {
    let temp = temp_dir();
    let missing = temp.path().join("nope.toml");
    let config = Config::builder()
        .add_toml_file_optional(&missing)
        .build()
        .unwrap();
    assert_eq!(config.store.dialect, "default");
}

#[test]
fn config_layered_files_merge_field_by_field() {
    let temp = temp_dir();
    let master = temp.path().join("master.toml");
    let local = temp.path().join("local.toml");
    fs::write(&master, "[store]\ndialect = 'inno'\nextension = 'isl'\n").unwrap();
    fs::write(&local, "[store]\nextension = 'ini'\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&master)
        .add_toml_file(&local)
        .build()
        .unwrap();

    // local overrides only what it names
    assert_eq!(config.store.dialect, "inno");
    assert_eq!(config.store.extension, "ini");
}

#[test]
fn config_invalid_toml_fails() {
    let temp = temp_dir();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[store\ndialect=").unwrap();
    assert!(Config::from_file(&path).is_err());
}
