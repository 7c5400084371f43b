// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution scenarios against the shipped catalogs

use xpath_messages::i18n::{CatalogRegistry, Locale, LocaleResolver, Resolution, DEFAULT_BASE_NAME};
use xpath_messages::keys::*;
use xpath_messages::CatalogError;

const SHIPPED: [&str; 10] = ["cs", "de", "fr", "hu", "ja", "ko", "pl", "sk", "sl", "tr"];

fn resolve(tag: &str) -> std::sync::Arc<xpath_messages::i18n::MessageCatalog> {
    let registry = CatalogRegistry::with_builtin();
    let locale = Locale::parse(tag).expect("valid tag");
    LocaleResolver::new(&registry)
        .resolve(DEFAULT_BASE_NAME, &locale)
        .expect("resolution should succeed")
}

#[test]
fn test_czech_empty_expression() {
    let catalog = resolve("cs");
    assert_eq!(catalog.get(ER_EMPTY_EXPRESSION).unwrap(), "Prázdný výraz!");
}

#[test]
fn test_unsupported_locale_falls_back_to_english() {
    let catalog = resolve("xx");
    assert_eq!(catalog.locale_tag(), "en");
    assert_eq!(catalog.get(ER_EMPTY_EXPRESSION).unwrap(), "Empty expression!");
}

#[test]
fn test_suffix_taiwan_carve_out() {
    assert_eq!(
        LocaleResolver::suffix_for(&Locale::new("zh", Some("TW"))),
        "_zh_TW"
    );
    assert_eq!(LocaleResolver::suffix_for(&Locale::new("fr", Some("FR"))), "_fr");
}

#[test]
fn test_unknown_key_surfaces_key_not_found() {
    let catalog = resolve("de");
    let err = catalog.get("ER_DOES_NOT_EXIST").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::KeyNotFound { ref key, ref locale } if key == "ER_DOES_NOT_EXIST" && locale == "de"
    ));
}

#[test]
fn test_every_shipped_locale_resolves_to_itself() {
    for tag in SHIPPED {
        let catalog = resolve(tag);
        assert_eq!(catalog.locale_tag(), tag);
        assert_eq!(catalog.get(LANGUAGE).unwrap(), tag);
    }
}

#[test]
fn test_country_does_not_change_bundle() {
    for tag in ["de_DE.UTF-8", "de-AT", "de_CH"] {
        assert_eq!(resolve(tag).locale_tag(), "de", "{}", tag);
    }
    // Taiwan has no bundle of its own here, so it falls back.
    assert_eq!(resolve("zh_TW").locale_tag(), "en");
}

#[test]
fn test_default_key_resolves_or_falls_back_everywhere() {
    let registry = CatalogRegistry::with_builtin();
    let base = registry.load(DEFAULT_BASE_NAME).unwrap();
    for tag in SHIPPED {
        let catalog = resolve(tag);
        for key in base.keys() {
            let text = catalog
                .get(key)
                .or_else(|err| {
                    assert!(err.is_recoverable());
                    base.get(key)
                })
                .unwrap();
            assert!(!text.is_empty(), "{} {}", tag, key);
        }
    }
}

#[test]
fn test_resolution_trace_reports_fallback() {
    let registry = CatalogRegistry::with_builtin();
    let resolver = LocaleResolver::new(&registry);
    match resolver.trace(DEFAULT_BASE_NAME, &Locale::new("pt", Some("BR"))) {
        Resolution::Resolved {
            bundle, fell_back, ..
        } => {
            assert_eq!(bundle, "xpath_errors");
            assert!(fell_back);
        }
        other => panic!("unexpected {:?}", other),
    }
    let exact = resolver.trace(DEFAULT_BASE_NAME, &Locale::new("ko", None));
    assert_eq!(exact.bundle(), Some("xpath_errors_ko"));
}

#[test]
fn test_empty_registry_is_unavailable() {
    let registry = CatalogRegistry::new();
    let err = LocaleResolver::new(&registry)
        .resolve(DEFAULT_BASE_NAME, &Locale::english())
        .unwrap_err();
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("xpath_errors_en"));
}

#[test]
fn test_process_default_picks_override_then_posix() {
    let registry = CatalogRegistry::with_builtin();
    let resolver = LocaleResolver::new(&registry);
    let lookup = |name: &str| match name {
        "XPATH_MESSAGES_LOCALE" => Some(" ".to_string()),
        "LC_MESSAGES" => Some("sl_SI.UTF-8".to_string()),
        _ => None,
    };
    let locale = Locale::process_default_with(lookup);
    let catalog = resolver.resolve(DEFAULT_BASE_NAME, &locale).unwrap();
    assert_eq!(catalog.locale_tag(), "sl");

    let by_default = resolver.resolve_default(DEFAULT_BASE_NAME).unwrap();
    assert_eq!(
        by_default.locale_tag(),
        resolver
            .resolve(DEFAULT_BASE_NAME, &Locale::process_default())
            .unwrap()
            .locale_tag()
    );
}
