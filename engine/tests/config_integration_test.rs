//! Integration tests for configuration management
//!
//! These tests verify that configuration files on disk are loaded,
//! defaulted and validated.

use examhub_engine::config::Config;
use examhub_engine::exam::ExamMode;
use sdk::{EngineError, ErrorExt};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[core]
log_level = "debug"

[settings]
theme = "Solarized"

[exam]
mode = "offline"

[walkthrough]
stakeholders = 4
sender = "Registrar"
mediator_message = "Exam schedule published"
email_message = "Your seat number"
realtime_message = "Hall B is open"
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();

    assert_eq!(config.core.log_level, "debug");
    assert_eq!(config.settings.theme, "Solarized");
    assert_eq!(config.exam.mode, ExamMode::Offline);
    assert_eq!(config.walkthrough.stakeholders, 4);
    assert_eq!(config.walkthrough.realtime_message, "Hall B is open");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, EngineError::Config(_)));
    assert!(err.is_recoverable());
    assert_eq!(err.user_hint(), "Check your config.toml file for errors");
}

#[test]
fn test_unknown_exam_mode_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[exam]\nmode = \"hybrid\"\n").unwrap();

    assert!(Config::load_from_path(&path).is_err());
}

#[test]
fn test_written_config_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.settings.theme = "Dark".to_string();
    config.walkthrough.stakeholders = 9;
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(Config::load_from_path(&path).unwrap(), config);
}
