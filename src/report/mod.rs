// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod audit;
pub mod formatter;
pub mod output;

use crate::i18n::{
    bundle_name, language_name, native_name, CatalogRegistry, Locale, LocaleResolver,
    MessageCatalog,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use audit::{audit, AuditReport, LocaleAudit, PlaceholderMismatch};
pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Every entry of one catalog, for `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    pub bundle: String,
    pub locale: String,
    pub entries: BTreeMap<String, String>,
}

impl CatalogListing {
    pub fn new(bundle: &str, catalog: &MessageCatalog) -> Self {
        Self {
            bundle: bundle.to_string(),
            locale: catalog.locale_tag().to_string(),
            entries: catalog
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// One shipped locale, for `locales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSummary {
    pub code: String,
    pub suffix: String,
    pub bundle: String,
    pub english_name: Option<String>,
    pub native_name: Option<String>,
    pub entries: usize,
}

/// Summaries of every locale bundle registered for `base_name`.
pub fn locale_summaries(registry: &CatalogRegistry, base_name: &str) -> Vec<LocaleSummary> {
    registry
        .locales(base_name)
        .into_iter()
        .filter_map(|code| {
            let suffix = format!("_{}", code);
            let bundle = bundle_name(base_name, &suffix);
            let catalog = registry.load(&bundle)?;
            let language = code.split('_').next().unwrap_or_default();
            Some(LocaleSummary {
                english_name: language_name(language).map(str::to_string),
                native_name: native_name(language).map(str::to_string),
                entries: catalog.len(),
                code: code.clone(),
                suffix,
                bundle,
            })
        })
        .collect()
}

/// Suffix for a raw locale tag, with the bundle it would select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixReport {
    pub tag: String,
    pub locale: String,
    pub suffix: String,
    pub bundle: String,
    pub registered: bool,
}

impl SuffixReport {
    pub fn new(registry: &CatalogRegistry, base_name: &str, tag: &str, locale: &Locale) -> Self {
        let suffix = LocaleResolver::suffix_for(locale);
        let bundle = bundle_name(base_name, &suffix);
        Self {
            tag: tag.to_string(),
            locale: locale.to_string(),
            registered: registry.contains(&bundle),
            suffix,
            bundle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DEFAULT_BASE_NAME;

    #[test]
    fn locale_summaries_name_every_bundle() {
        let registry = CatalogRegistry::with_builtin();
        let summaries = locale_summaries(&registry, DEFAULT_BASE_NAME);
        assert_eq!(summaries.len(), 11);
        let sk = summaries.iter().find(|s| s.code == "sk").unwrap();
        assert_eq!(sk.bundle, "xpath_errors_sk");
        assert_eq!(sk.english_name.as_deref(), Some("Slovak"));
        assert_eq!(sk.native_name.as_deref(), Some("Slovenčina"));
        assert!(sk.entries > 150);
    }

    #[test]
    fn listing_is_sorted_and_complete() {
        let registry = CatalogRegistry::with_builtin();
        let catalog = registry.load("xpath_errors_hu").unwrap();
        let listing = CatalogListing::new("xpath_errors_hu", &catalog);
        assert_eq!(listing.locale, "hu");
        assert_eq!(listing.entries.len(), catalog.len());
        assert_eq!(listing.entries.get("language").map(String::as_str), Some("hu"));
    }

    #[test]
    fn suffix_report_checks_registration() {
        let registry = CatalogRegistry::with_builtin();
        let tw = Locale::parse("zh_TW").unwrap();
        let report = SuffixReport::new(&registry, DEFAULT_BASE_NAME, "zh_TW", &tw);
        assert_eq!(report.suffix, "_zh_TW");
        assert!(!report.registered);
        let de = Locale::parse("de-AT").unwrap();
        let report = SuffixReport::new(&registry, DEFAULT_BASE_NAME, "de-AT", &de);
        assert_eq!(report.bundle, "xpath_errors_de");
        assert!(report.registered);
    }
}
