// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading configuration files from disk

use std::fs;
use tempfile::TempDir;
use xpath_messages::config::MessagesConfig;
use xpath_messages::i18n::{CatalogRegistry, Locale};
use xpath_messages::keys::ER_EMPTY_EXPRESSION;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_yaml_config_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "messages.yaml", "locale: cs_CZ\n");
    let config = MessagesConfig::load(&path).unwrap();
    assert_eq!(config.base_name, "xpath_errors");
    assert_eq!(config.locale.as_deref(), Some("cs_CZ"));
    assert_eq!(config.fallback_bundle(), "xpath_errors");
}

#[test]
fn test_json_config_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "messages.json",
        r#"{"base_name": "xpath_errors", "fallback_bundle": "xpath_errors_de"}"#,
    );
    let config = MessagesConfig::load(&path).unwrap();
    assert_eq!(config.fallback_bundle(), "xpath_errors_de");
}

#[test]
fn test_configured_fallback_changes_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "messages.yml", "fallback_bundle: xpath_errors_de\n");
    let config = MessagesConfig::load(&path).unwrap();
    let registry = CatalogRegistry::with_builtin();
    let catalog = config
        .resolver(&registry)
        .resolve(&config.base_name, &Locale::new("pt", None))
        .unwrap();
    assert_eq!(catalog.get(ER_EMPTY_EXPRESSION).unwrap(), "Leerer Ausdruck!");
}

#[test]
fn test_custom_base_name_registers_builtin_tables() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "messages.yaml", "base_name: engine_messages\n");
    let config = MessagesConfig::load(&path).unwrap();
    let registry = CatalogRegistry::with_builtin_named(&config.base_name);
    assert!(registry.contains("engine_messages"));
    assert!(registry.contains("engine_messages_sk"));
    let catalog = config
        .resolver(&registry)
        .resolve(&config.base_name, &Locale::new("sk", Some("SK")))
        .unwrap();
    assert_eq!(catalog.locale_tag(), "sk");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = MessagesConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("reading config"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "messages.yaml", "locale: de\ncolour: blue\n");
    assert!(MessagesConfig::load(&path).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let empty_base = write(&dir, "a.yaml", "base_name: \"  \"\n");
    assert!(MessagesConfig::load(&empty_base).is_err());
    let posix = write(&dir, "b.json", r#"{"locale": "POSIX"}"#);
    assert!(MessagesConfig::load(&posix).is_err());
}

#[test]
fn test_no_path_gives_defaults() {
    let config = MessagesConfig::load_or_default(None).unwrap();
    assert_eq!(config, MessagesConfig::default());
}
