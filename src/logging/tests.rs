// lokit: Localization Toolkit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
}

#[test]
fn test_log_level_to_tracing() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::ERROR.to_tracing_level(), Some(Level::ERROR));
    assert_eq!(LogLevel::INFO.to_tracing_level(), Some(Level::INFO));
    assert_eq!(LogLevel::TRACE.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_filter_strings() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::WARN.to_filter_string(), "warn");
    assert_eq!(LogLevel::DEBUG.to_filter_string(), "debug");
}

#[test]
fn test_log_level_serde_round_trip() {
    let level = LogLevel::DEBUG;
    let json = serde_json::to_string(&level).unwrap();
    assert_eq!(json, "4");
    let back: LogLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, level);

    // Out-of-range values are rejected on deserialization
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("out/lokit.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("out/lokit.log"));
}
