//! Integration tests for CLI config command and config file loading
//!
//! Verifies template generation, file round-trips, and error context.

use std::fs;
use suggestcheck::cli::generate_config_template;
use suggestcheck::config::{Config, DEFAULT_ENDPOINT_URL, DEFAULT_MODEL};
use suggestcheck::error::AppError;
use tempfile::TempDir;

/// Helper to create temporary directory for file operations
fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[test]
fn test_generated_template_creates_valid_config_file() {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("suggestcheck.toml");

    fs::write(&config_path, generate_config_template()).expect("Failed to write template");

    let config =
        Config::from_file(&config_path).expect("Generated template should load as valid Config");

    assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT_URL);
    assert_eq!(config.endpoint.model, DEFAULT_MODEL);
    assert_eq!(config.endpoint.temperature, 1.0);
    assert_eq!(config.endpoint.timeout_seconds, 30);
    assert!(!config.checks.fail_on_forbidden_keywords);
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn test_template_matches_built_in_defaults() {
    let from_template: Config = generate_config_template()
        .parse()
        .expect("template should parse");
    let defaults = Config::default();

    assert_eq!(from_template.endpoint.url, defaults.endpoint.url);
    assert_eq!(from_template.endpoint.model, defaults.endpoint.model);
    assert_eq!(
        from_template.checks.conversation_context,
        defaults.checks.conversation_context
    );
    assert_eq!(
        from_template.checks.forbidden_keywords,
        defaults.checks.forbidden_keywords
    );
}

#[test]
fn test_missing_file_reports_path() {
    let temp_dir = create_temp_dir();
    let missing = temp_dir.path().join("nope.toml");

    let err = Config::from_file(&missing).expect_err("missing file should fail");
    assert!(matches!(err, AppError::ConfigFileRead { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_malformed_toml_reports_parse_failure() {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[endpoint\nurl = ").expect("Failed to write file");

    let err = Config::from_file(&config_path).expect_err("broken TOML should fail");
    assert!(matches!(err, AppError::ConfigParseFailed { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_invalid_values_report_validation_failure() {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(
        &config_path,
        r#"
[endpoint]
timeout_seconds = 0
"#,
    )
    .expect("Failed to write file");

    let err = Config::from_file(&config_path).expect_err("zero timeout should fail");
    match err {
        AppError::ConfigValidationFailed { path, reason } => {
            assert!(path.contains("invalid.toml"));
            assert!(reason.contains("timeout_seconds"));
        }
        other => panic!("expected ConfigValidationFailed, got {:?}", other),
    }
}

#[test]
fn test_load_with_path_reads_file() {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[endpoint]
model = "gemma3:4b"
"#,
    )
    .expect("Failed to write file");

    let path = config_path.to_str().expect("temp path is UTF-8");
    let config = Config::load(Some(path)).expect("should load");
    assert_eq!(config.endpoint.model, "gemma3:4b");
    assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT_URL);
}
