// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog coverage audit.
//!
//! Compares every locale bundle registered for a base name against the base
//! catalog. Coverage is measured on base keys only; keys a locale defines
//! that the base does not are listed separately as extras.

use crate::error::{CatalogError, CatalogResult};
use crate::i18n::format::placeholders;
use crate::i18n::{bundle_name, CatalogRegistry, MessageCatalog};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub base_name: String,
    pub base_locale: String,
    pub base_keys: usize,
    pub locales: Vec<LocaleAudit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleAudit {
    pub bundle: String,
    pub locale: String,
    pub keys: usize,
    /// Percentage of base keys this locale defines.
    pub coverage: f64,
    pub missing_keys: Vec<String>,
    pub extra_keys: Vec<String>,
    /// Keys the source table assigned more than once.
    pub duplicate_keys: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub expected: Vec<usize>,
    pub found: Vec<usize>,
}

impl AuditReport {
    pub fn has_placeholder_mismatches(&self) -> bool {
        self.locales
            .iter()
            .any(|locale| !locale.placeholder_mismatches.is_empty())
    }

    pub fn total_missing(&self) -> usize {
        self.locales.iter().map(|l| l.missing_keys.len()).sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.locales.iter().map(|l| l.duplicate_keys.len()).sum()
    }

    pub fn locale(&self, suffix: &str) -> Option<&LocaleAudit> {
        self.locales.iter().find(|l| l.locale == suffix)
    }
}

/// Audit every `<base_name>_<suffix>` bundle in `registry` against the bare
/// `base_name` bundle.
pub fn audit(registry: &CatalogRegistry, base_name: &str) -> CatalogResult<AuditReport> {
    let base = registry
        .load(base_name)
        .ok_or_else(|| CatalogError::CatalogUnavailable {
            base_name: base_name.to_string(),
            tried: vec![base_name.to_string()],
        })?;

    let mut locales = Vec::new();
    for suffix in registry.locales(base_name) {
        let bundle = bundle_name(base_name, &format!("_{}", suffix));
        if let Some(catalog) = registry.load(&bundle) {
            locales.push(audit_locale(&base, &catalog, bundle, suffix));
        }
    }

    Ok(AuditReport {
        base_name: base_name.to_string(),
        base_locale: base.locale_tag().to_string(),
        base_keys: base.len(),
        locales,
    })
}

fn audit_locale(
    base: &MessageCatalog,
    catalog: &MessageCatalog,
    bundle: String,
    locale: String,
) -> LocaleAudit {
    let mut missing_keys = Vec::new();
    let mut placeholder_mismatches = Vec::new();

    for (key, base_template) in base.entries() {
        match catalog.get(key) {
            Ok(template) => {
                let expected = placeholders(base_template);
                let found = placeholders(template);
                if expected != found {
                    placeholder_mismatches.push(PlaceholderMismatch {
                        key: key.to_string(),
                        expected: expected.into_iter().collect(),
                        found: found.into_iter().collect(),
                    });
                }
            }
            Err(_) => missing_keys.push(key.to_string()),
        }
    }

    let extra_keys: Vec<String> = catalog
        .keys()
        .into_iter()
        .filter(|key| !base.contains(key))
        .map(str::to_string)
        .collect();

    let coverage = if base.is_empty() {
        100.0
    } else {
        (base.len() - missing_keys.len()) as f64 * 100.0 / base.len() as f64
    };

    LocaleAudit {
        bundle,
        locale,
        keys: catalog.len(),
        coverage,
        missing_keys,
        extra_keys,
        duplicate_keys: catalog.duplicate_keys().iter().cloned().collect(),
        placeholder_mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DEFAULT_BASE_NAME;
    use crate::keys::{
        ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
        ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
    };

    #[test]
    fn builtin_catalogs_are_consistent() {
        let report = audit(&CatalogRegistry::with_builtin(), DEFAULT_BASE_NAME).unwrap();
        assert_eq!(report.base_locale, "en");
        assert_eq!(report.locales.len(), 11);
        assert!(!report.has_placeholder_mismatches());

        let en = report.locale("en").unwrap();
        assert_eq!(en.coverage, 100.0);
        assert!(en.duplicate_keys.is_empty());

        for locale in report.locales.iter().filter(|l| l.locale != "en") {
            assert_eq!(
                locale.missing_keys,
                vec![ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER.to_string()],
                "{}",
                locale.locale
            );
            assert_eq!(
                locale.duplicate_keys,
                vec![ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER.to_string()]
            );
            assert!(locale.extra_keys.is_empty());
            assert!(locale.coverage < 100.0 && locale.coverage > 99.0);
        }
        assert_eq!(report.total_missing(), 10);
        assert_eq!(report.total_duplicates(), 10);
    }

    #[test]
    fn reports_mismatches_and_extras() {
        let mut registry = CatalogRegistry::new();
        registry.register(
            "m",
            MessageCatalog::from_pairs("en", [("A", "a {0}"), ("B", "b {0} {1}"), ("C", "c")]),
        );
        registry.register(
            "m_de",
            MessageCatalog::from_pairs("de", [("A", "a {1}"), ("B", "b {1} {0}"), ("Z", "z")]),
        );
        let report = audit(&registry, "m").unwrap();
        let de = report.locale("de").unwrap();
        assert_eq!(de.missing_keys, vec!["C"]);
        assert_eq!(de.extra_keys, vec!["Z"]);
        assert_eq!(
            de.placeholder_mismatches,
            vec![PlaceholderMismatch {
                key: "A".to_string(),
                expected: vec![0],
                found: vec![1],
            }]
        );
        assert!(report.has_placeholder_mismatches());
    }

    #[test]
    fn missing_base_bundle_is_unavailable() {
        let err = audit(&CatalogRegistry::new(), "m").unwrap_err();
        assert!(!err.is_recoverable());
    }
}
