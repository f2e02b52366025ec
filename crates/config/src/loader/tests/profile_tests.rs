//! Profile loading tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test loading configuration from profile files.
//! - Test error handling for missing profiles.
//! - Test profile override behavior with builder methods.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Creates a test configuration file with predefined profiles.
pub fn create_test_config_file(dir: &std::path::Path) -> PathBuf {
    let config_path = dir.join("config.json");

    let config = serde_json::json!({
        "profiles": {
            "lab": {
                "server": "lab-fw.example.com",
                "username": "lab_admin",
                "password": "lab-password",
                "skip_verify": true,
                "timeout_seconds": 60,
                "app_name": "lab-tools"
            },
            "partial": {
                "server": "partial.example.com"
            }
        }
    });

    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "{}", config).unwrap();

    config_path
}

#[test]
fn test_loader_from_profile_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    let config = ConfigLoader::new()
        .with_profile_name("lab".to_string())
        .with_config_path(config_path)
        .from_profile()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.connection.server, "lab-fw.example.com");
    assert_eq!(config.auth.username, "lab_admin");
    assert_eq!(config.auth.password.expose_secret(), "lab-password");
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(60));
    assert_eq!(config.application.name, "lab-tools");
}

#[test]
fn test_partial_profile_completed_by_builder() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    let config = ConfigLoader::new()
        .with_profile_name("partial".to_string())
        .with_config_path(config_path)
        .from_profile()
        .unwrap()
        .with_username("admin".to_string())
        .with_password("pw".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.server, "partial.example.com");
    assert_eq!(config.auth.username, "admin");
}

#[test]
fn test_missing_profile_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    let result = ConfigLoader::new()
        .with_profile_name("nope".to_string())
        .with_config_path(config_path)
        .from_profile()
        .unwrap()
        .build();

    match result {
        Err(ConfigError::ProfileNotFound(name)) => assert_eq!(name, "nope"),
        other => panic!("Expected ProfileNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_profile_tolerated_with_complete_overrides() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::new()
        .with_profile_name("nope".to_string())
        .with_config_path(temp_dir.path().join("absent.json"))
        .from_profile()
        .unwrap()
        .with_server("fw".to_string())
        .with_username("admin".to_string())
        .with_password("pw".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.server, "fw");
}

#[test]
fn test_malformed_config_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ profiles: ").unwrap();

    let result = ConfigLoader::new()
        .with_profile_name("lab".to_string())
        .with_config_path(path.clone())
        .from_profile();

    match result {
        Err(ConfigError::ConfigFileParse { path: p }) => assert_eq!(p, path),
        _ => panic!("Expected ConfigFileParse"),
    }
}

#[test]
fn test_no_profile_name_skips_file() {
    let temp_dir = TempDir::new().unwrap();

    // Path does not exist, but without a profile name it is never read.
    let loader = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.json"))
        .from_profile()
        .unwrap();
    assert!(loader.profile_name().is_none());
}
