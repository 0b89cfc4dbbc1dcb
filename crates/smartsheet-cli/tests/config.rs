//! Integration tests for configuration resolution.

use std::collections::HashMap;
use std::path::PathBuf;

use smartsheet_cli::config::{
    API_BASE_URL_VAR, API_TOKEN_VAR, ConfigError, ConfigOverrides, DEFAULT_OUTPUT,
    DEFAULT_SHEET_ID, ExportConfig, OUTPUT_VAR, SHEET_ID_VAR,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_missing_credential() {
    let err = ExportConfig::resolve(&ConfigOverrides::default(), lookup(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredential));
    assert!(err.to_string().contains("SMARTSHEET_API"));
}

#[test]
fn test_blank_credential_counts_as_missing() {
    let err = ExportConfig::resolve(&ConfigOverrides::default(), lookup(&[(API_TOKEN_VAR, "   ")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredential));
}

#[test]
fn test_defaults() {
    let config =
        ExportConfig::resolve(&ConfigOverrides::default(), lookup(&[(API_TOKEN_VAR, "tok")]))
            .unwrap();
    assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.api_base_url, "https://api.smartsheet.com/2.0");
}

#[test]
fn test_empty_env_values_fall_back_to_defaults() {
    let config = ExportConfig::resolve(
        &ConfigOverrides::default(),
        lookup(&[(API_TOKEN_VAR, "tok"), (SHEET_ID_VAR, " "), (OUTPUT_VAR, "")]),
    )
    .unwrap();
    assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
}

#[test]
fn test_environment_values() {
    let config = ExportConfig::resolve(
        &ConfigOverrides::default(),
        lookup(&[
            (API_TOKEN_VAR, "tok"),
            (SHEET_ID_VAR, "123"),
            (OUTPUT_VAR, "out/rows.csv"),
            (API_BASE_URL_VAR, "https://api.smartsheet.eu/2.0"),
        ]),
    )
    .unwrap();
    assert_eq!(config.sheet_id.get(), 123);
    assert_eq!(config.output_path, PathBuf::from("out/rows.csv"));
    assert_eq!(config.api_base_url, "https://api.smartsheet.eu/2.0");
}

#[test]
fn test_overrides_win_over_environment() {
    let overrides = ConfigOverrides {
        sheet_id: Some("456".to_string()),
        output: Some(PathBuf::from("flag.csv")),
        api_base_url: Some("https://api.smartsheetgov.com/2.0".to_string()),
    };
    let config = ExportConfig::resolve(
        &overrides,
        lookup(&[
            (API_TOKEN_VAR, "tok"),
            (SHEET_ID_VAR, "123"),
            (OUTPUT_VAR, "env.csv"),
        ]),
    )
    .unwrap();
    assert_eq!(config.sheet_id.get(), 456);
    assert_eq!(config.output_path, PathBuf::from("flag.csv"));
    assert_eq!(config.api_base_url, "https://api.smartsheetgov.com/2.0");
}

#[test]
fn test_invalid_sheet_id() {
    let err = ExportConfig::resolve(
        &ConfigOverrides::default(),
        lookup(&[(API_TOKEN_VAR, "tok"), (SHEET_ID_VAR, "sheet-one")]),
    )
    .unwrap_err();
    match err {
        ConfigError::InvalidSheetId { value, .. } => assert_eq!(value, "sheet-one"),
        other => panic!("unexpected error: {other:?}"),
    }
}
