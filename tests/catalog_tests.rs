// SPDX-License-Identifier: PMPL-1.0-or-later

//! Consistency of the shipped catalogs and message rendering

use std::fmt::Display;
use xpath_messages::i18n::format::placeholders;
use xpath_messages::i18n::{CatalogRegistry, Locale, MessageCatalog, XPathMessages, DEFAULT_BASE_NAME};
use xpath_messages::keys::*;
use xpath_messages::report::audit;

fn messages(tag: &str) -> XPathMessages {
    let registry = CatalogRegistry::with_builtin();
    XPathMessages::for_locale(&registry, DEFAULT_BASE_NAME, &Locale::parse(tag).unwrap())
        .expect("builtin locale resolves")
}

#[test]
fn test_every_placeholder_is_substituted_in_every_locale() {
    let registry = CatalogRegistry::with_builtin();
    for suffix in registry.locales(DEFAULT_BASE_NAME) {
        let messages = messages(&suffix);
        let catalog = messages.resolved();
        for (key, template) in catalog.entries() {
            let indices = placeholders(template);
            if indices.is_empty() {
                continue;
            }
            let values: Vec<String> = (0..=*indices.iter().max().unwrap())
                .map(|i| format!("<arg{}>", i))
                .collect();
            let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
            let rendered = messages.create_message(key, &args).unwrap_or_else(|err| {
                panic!("{} {} failed to format: {}", suffix, key, err)
            });
            for index in &indices {
                assert!(
                    rendered.contains(&format!("<arg{}>", index)),
                    "{} {} dropped {{{}}}: {}",
                    suffix,
                    key,
                    index,
                    rendered
                );
            }
            assert!(!rendered.contains("''"), "{} {} kept a doubled quote", suffix, key);
        }
    }
}

#[test]
fn test_xpath_result_messages_quote_the_expression() {
    let en = messages("en");
    let text = en
        .create_message(ER_CANT_CONVERT_TO_STRING, &[&"//a", &"NUMBER_TYPE"])
        .unwrap();
    assert!(text.starts_with("The XPathResult of XPath expression '//a' has an XPathResultType"));
}

#[test]
fn test_warning_and_error_headers() {
    let de = messages("de");
    assert_eq!(
        de.create_error(ER_UNKNOWN_AXIS, &[&"sideways"]).unwrap(),
        "Fehler: Unbekannte Achse: sideways"
    );
    assert!(de
        .create_warning(WG_FUNCTION_TOKEN_NOT_FOUND, &[])
        .unwrap()
        .starts_with("Warnung: "));
}

#[test]
fn test_as_node_iterator_renders_english_in_translations() {
    for tag in ["cs", "hu", "sl"] {
        let text = messages(tag)
            .create_message(ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, &[])
            .unwrap();
        assert_eq!(text, "asNodeIterator() not supported by XRTreeFragSelectWrapper");
    }
}

#[test]
fn test_render_or_key_never_fails() {
    let ko = messages("ko");
    assert_eq!(ko.render_or_key("ER_NOPE", &[&"x"]), "ER_NOPE [x]");
    assert!(!ko.render_or_key(ER_EMPTY_EXPRESSION, &[]).is_empty());
}

#[test]
fn test_catalog_round_trip_and_last_write_wins() {
    let pairs = vec![
        ("ER_A".to_string(), "first".to_string()),
        ("ER_B".to_string(), "b {0}".to_string()),
        ("ER_A".to_string(), "second".to_string()),
    ];
    let catalog = MessageCatalog::from_pairs("xx", pairs);
    assert_eq!(catalog.get("ER_A").unwrap(), "second");
    assert_eq!(catalog.get("ER_B").unwrap(), "b {0}");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_audit_finds_only_the_known_quirk() {
    let report = audit(&CatalogRegistry::with_builtin(), DEFAULT_BASE_NAME).unwrap();
    assert!(!report.has_placeholder_mismatches());
    for locale in &report.locales {
        assert!(locale.extra_keys.is_empty(), "{}", locale.locale);
        if locale.locale == "en" {
            assert!(locale.missing_keys.is_empty());
        } else {
            assert_eq!(locale.missing_keys.len(), 1, "{}", locale.locale);
            assert_eq!(locale.duplicate_keys.len(), 1, "{}", locale.locale);
        }
    }
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"duplicate_keys\":[\"ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER\"]"));
}

#[test]
fn test_shared_catalogs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<std::sync::Arc<MessageCatalog>>();
    assert_send_sync::<CatalogRegistry>();
    assert_send_sync::<XPathMessages>();

    let handle = std::thread::spawn(|| {
        xpath_messages::i18n::builtin_registry()
            .load("xpath_errors_pl")
            .map(|catalog| catalog.len())
    });
    assert!(handle.join().unwrap().unwrap() > 0);
}
