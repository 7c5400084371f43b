// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundle registry.
//!
//! Maps bundle names (`<base_name><suffix>`, e.g. `xpath_errors_de`) to
//! shared catalogs. The base English catalog is registered under the bare
//! base name and under `<base_name>_en`.
//!
//! A registry is an ordinary value: build it once, then pass it to whatever
//! renders messages. [`builtin_registry`] exists for callers that want a
//! shared instance without threading one through.

use super::catalog::MessageCatalog;
use super::tables::{self, BASE_LANGUAGE};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Base name the shipped catalogs are registered under.
pub const DEFAULT_BASE_NAME: &str = "xpath_errors";

#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    bundles: BTreeMap<String, Arc<MessageCatalog>>,
}

impl CatalogRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every shipped catalog under [`DEFAULT_BASE_NAME`].
    pub fn with_builtin() -> Self {
        Self::with_builtin_named(DEFAULT_BASE_NAME)
    }

    /// Registry holding every shipped catalog under `base_name`.
    pub fn with_builtin_named(base_name: &str) -> Self {
        let mut registry = Self::new();
        for (language, table) in tables::BUILTIN {
            let catalog = Arc::new(MessageCatalog::from_pairs(*language, table.iter().copied()));
            if *language == BASE_LANGUAGE {
                registry.register_shared(base_name, Arc::clone(&catalog));
            }
            registry.register_shared(&bundle_name(base_name, &format!("_{}", language)), catalog);
        }
        registry
    }

    /// Register `catalog` under `name`. A later registration replaces an
    /// earlier one; the replaced catalog is returned.
    pub fn register(&mut self, name: &str, catalog: MessageCatalog) -> Option<Arc<MessageCatalog>> {
        self.register_shared(name, Arc::new(catalog))
    }

    pub fn register_shared(
        &mut self,
        name: &str,
        catalog: Arc<MessageCatalog>,
    ) -> Option<Arc<MessageCatalog>> {
        let previous = self.bundles.insert(name.to_string(), catalog);
        if previous.is_some() {
            log::debug!("bundle '{}' re-registered", name);
        }
        previous
    }

    pub fn load(&self, name: &str) -> Option<Arc<MessageCatalog>> {
        self.bundles.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bundles.contains_key(name)
    }

    /// Registered bundle names, sorted.
    pub fn bundle_names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Suffixes registered for `base_name`, without the leading `_`
    /// (`["cs", "de", ..., "zh_TW"]`). The bare base bundle is not listed.
    pub fn locales(&self, base_name: &str) -> Vec<String> {
        let prefix = format!("{}_", base_name);
        self.bundles
            .keys()
            .filter_map(|name| name.strip_prefix(&prefix))
            .filter(|suffix| !suffix.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// `base_name` joined with a suffix from [`super::LocaleResolver::suffix_for`].
pub fn bundle_name(base_name: &str, suffix: &str) -> String {
    format!("{}{}", base_name, suffix)
}

/// Shared registry of the shipped catalogs, built on first use.
pub fn builtin_registry() -> &'static CatalogRegistry {
    static REGISTRY: OnceLock<CatalogRegistry> = OnceLock::new();
    REGISTRY.get_or_init(CatalogRegistry::with_builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registers_every_shipped_locale() {
        let registry = CatalogRegistry::with_builtin();
        assert_eq!(
            registry.locales(DEFAULT_BASE_NAME),
            vec!["cs", "de", "en", "fr", "hu", "ja", "ko", "pl", "sk", "sl", "tr"]
        );
        // Eleven suffixed bundles plus the bare base.
        assert_eq!(registry.len(), 12);
        assert!(registry.contains("xpath_errors"));
        assert!(registry.contains("xpath_errors_tr"));
    }

    #[test]
    fn base_bundle_is_english() {
        let registry = CatalogRegistry::with_builtin();
        let base = registry.load(DEFAULT_BASE_NAME).unwrap();
        let en = registry.load("xpath_errors_en").unwrap();
        assert!(Arc::ptr_eq(&base, &en));
        assert_eq!(base.locale_tag(), "en");
    }

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut registry = CatalogRegistry::new();
        assert!(registry.is_empty());
        let first = MessageCatalog::from_pairs("de", [("k", "eins")]);
        let second = MessageCatalog::from_pairs("de", [("k", "zwei")]);
        assert!(registry.register("msgs_de", first).is_none());
        let replaced = registry.register("msgs_de", second).unwrap();
        assert_eq!(replaced.get("k").unwrap(), "eins");
        assert_eq!(registry.load("msgs_de").unwrap().get("k").unwrap(), "zwei");
        assert!(registry.load("msgs_fr").is_none());
    }

    #[test]
    fn custom_base_name() {
        let registry = CatalogRegistry::with_builtin_named("xpath");
        assert!(registry.contains("xpath"));
        assert!(registry.contains("xpath_ja"));
        assert!(!registry.contains(DEFAULT_BASE_NAME));
        assert_eq!(registry.bundle_names().next(), Some("xpath"));
    }

    #[test]
    fn builtin_registry_is_shared() {
        assert!(std::ptr::eq(builtin_registry(), builtin_registry()));
        assert!(builtin_registry().contains("xpath_errors_ko"));
    }
}
