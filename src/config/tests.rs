//! Tests for config functionality.

use crate::config::Config;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.specs_dir, "specs");
    assert_eq!(config.input_file, "spec.md");
    assert_eq!(config.plan_file, "plan.md");
    assert_eq!(config.tasks_file, "tasks.md");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
specs_dir: docs/features
plan_file: PLAN.md
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.specs_dir, "docs/features");
    assert_eq!(config.plan_file, "PLAN.md");

    // Unspecified values should use defaults
    assert_eq!(config.input_file, "spec.md");
    assert_eq!(config.tasks_file, "tasks.md");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
specs_dir: specs
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.specs_dir, "specs");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("specs_dir: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_validate_rejects_empty_file_name() {
    let config = Config {
        plan_file: "  ".to_string(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("plan_file must be non-empty"));
}

#[test]
fn test_validate_rejects_path_in_file_name() {
    let config = Config {
        tasks_file: "../tasks.md".to_string(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tasks_file must be a plain file name"));
}

#[test]
fn test_validate_rejects_colliding_names() {
    let config = Config {
        plan_file: "spec.md".to_string(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("input_file and plan_file"));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("missing.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_with_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("docgen.yaml");
    std::fs::write(&path, "input_file: feature.md\n").unwrap();

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.input_file, "feature.md");
}
