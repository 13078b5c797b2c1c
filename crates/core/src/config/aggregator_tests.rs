// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn defaults_listen_for_error_and_stop_wiring() {
    let config = AggregatorConfig::default();
    assert_eq!(config.error_event(), EventName::error());
    assert_eq!(config.non_source, NonSourcePolicy::StopWiring);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = AggregatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, AggregatorConfig::default());
}

#[test]
fn toml_overrides_fields() {
    let config = AggregatorConfig::from_toml_str(
        r#"
        error_event = "failed"
        non_source = "wire_remaining"
        "#,
    )
    .unwrap();

    assert_eq!(config.error_event(), EventName::from("failed"));
    assert_eq!(config.non_source, NonSourcePolicy::WireRemaining);
}

#[test]
fn unknown_policy_is_rejected() {
    let err = AggregatorConfig::from_toml_str(r#"non_source = "ignore""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = AggregatorConfig::from_toml_str("timeout = 5").unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn empty_error_event_falls_back_to_default() {
    let config = AggregatorConfig::new().with_error_event("");
    assert_eq!(config.error_event(), EventName::error());
}

#[test]
fn builder_methods_set_fields() {
    let config = AggregatorConfig::new()
        .with_error_event("oops")
        .with_non_source_policy(NonSourcePolicy::WireRemaining);

    assert_eq!(config.error_event, "oops");
    assert_eq!(config.non_source, NonSourcePolicy::WireRemaining);
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "error_event = \"broken\"").unwrap();

    let config = AggregatorConfig::load(file.path()).unwrap();
    assert_eq!(config.error_event(), EventName::from("broken"));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = AggregatorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}
