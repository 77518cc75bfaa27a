//! Tests for config functionality.

use crate::config::{Config, ReferentialAction};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.actor.kind, "user");
    assert_eq!(config.actor.table, "users");
    assert_eq!(config.actor.primary_key, "id");
    assert_eq!(config.columns.locked, "is_locked");
    assert_eq!(config.columns.locked_by, "locked_by_id");
    assert_eq!(config.on_delete, ReferentialAction::Restrict);
    assert!(config.exempt_background);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
actor:
  table: accounts
exempt_background: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.actor.table, "accounts");
    assert!(!config.exempt_background);

    // Unspecified values should use defaults
    assert_eq!(config.actor.kind, "user");
    assert_eq!(config.actor.primary_key, "id");
    assert_eq!(config.columns.locked, "is_locked");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
actor:
  kind: operator
  table: operators
  primary_key: operator_id
columns:
  locked: frozen
  locked_by: frozen_by
on_delete: set_null
exempt_background: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.actor.kind, "operator");
    assert_eq!(config.actor.table, "operators");
    assert_eq!(config.actor.primary_key, "operator_id");
    assert_eq!(config.columns.locked, "frozen");
    assert_eq!(config.columns.locked_by, "frozen_by");
    assert_eq!(config.on_delete, ReferentialAction::SetNull);
    assert!(!config.exempt_background);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
future_option: 42
actor:
  kind: user
  display_column: name
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.actor.kind, "user");
}

#[test]
fn test_validate_rejects_empty_actor_kind() {
    let result = Config::from_yaml("actor:\n  kind: \"  \"\n");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("actor.kind"));
}

#[test]
fn test_validate_rejects_invalid_identifiers() {
    let result = Config::from_yaml("actor:\n  table: \"users; drop table users\"\n");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("actor.table"));
    assert!(err.to_string().contains("valid identifier"));
}

#[test]
fn test_validate_rejects_identical_lock_columns() {
    let yaml = r#"
columns:
  locked: locked
  locked_by: locked
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_referential_action_from_str() {
    assert_eq!(
        ReferentialAction::from_str("restrict"),
        Some(ReferentialAction::Restrict)
    );
    assert_eq!(
        ReferentialAction::from_str("cascade"),
        Some(ReferentialAction::Cascade)
    );
    assert_eq!(
        ReferentialAction::from_str("set_null"),
        Some(ReferentialAction::SetNull)
    );
    assert_eq!(
        ReferentialAction::from_str("no_action"),
        Some(ReferentialAction::NoAction)
    );
    assert_eq!(ReferentialAction::from_str("delete"), None);
    assert_eq!(ReferentialAction::SetNull.as_sql(), "SET NULL");
}

#[test]
fn test_yaml_round_trip_preserves_values() {
    let mut config = Config::default();
    config.actor.table = "members".to_string();
    config.on_delete = ReferentialAction::Cascade;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rowlock.yaml");
    std::fs::write(&path, "actor:\n  kind: admin\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.actor.kind, "admin");
}

#[test]
fn test_load_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.yaml");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_load_or_default_without_path() {
    let config = Config::load_or_default(None::<&str>).unwrap();
    assert_eq!(config, Config::default());
}
