// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-to-catalog resolution.
//!
//! Resolution is a two-level chain: the exact bundle for the locale's
//! suffix, then one fallback bundle. There is no further search. When the
//! fallback is missing too, no message can be rendered at all and the
//! result is [`CatalogError::CatalogUnavailable`].

use super::catalog::MessageCatalog;
use super::locale::Locale;
use super::registry::{bundle_name, CatalogRegistry};
use crate::error::{CatalogError, CatalogResult};
use std::sync::Arc;

/// Countries whose code joins the language in the bundle suffix.
const COUNTRY_SUFFIXED: &[&str] = &["TW"];

/// Outcome of one resolution attempt.
#[derive(Debug, Clone, Default)]
pub enum Resolution {
    /// No lookup has run yet.
    #[default]
    Unresolved,
    /// A catalog was found. `fell_back` is set when the exact bundle was
    /// missing and the fallback bundle was used instead.
    Resolved {
        bundle: String,
        catalog: Arc<MessageCatalog>,
        fell_back: bool,
    },
    Failed(CatalogError),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }

    /// Bundle name that satisfied the lookup, if any.
    pub fn bundle(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { bundle, .. } => Some(bundle.as_str()),
            _ => None,
        }
    }

    pub fn into_result(self) -> CatalogResult<Arc<MessageCatalog>> {
        match self {
            Resolution::Resolved { catalog, .. } => Ok(catalog),
            Resolution::Failed(err) => Err(err),
            Resolution::Unresolved => Err(CatalogError::CatalogUnavailable {
                base_name: String::new(),
                tried: Vec::new(),
            }),
        }
    }
}

/// Picks the catalog best matching a locale from a [`CatalogRegistry`].
#[derive(Debug, Clone)]
pub struct LocaleResolver<'a> {
    registry: &'a CatalogRegistry,
    fallback_bundle: Option<String>,
}

impl<'a> LocaleResolver<'a> {
    /// Resolver whose fallback is the bare base bundle (English).
    pub fn new(registry: &'a CatalogRegistry) -> Self {
        Self {
            registry,
            fallback_bundle: None,
        }
    }

    /// Use `bundle` instead of the bare base name as the fallback.
    pub fn with_fallback(mut self, bundle: impl Into<String>) -> Self {
        self.fallback_bundle = Some(bundle.into());
        self
    }

    /// `"_" + language`, plus `"_" + country` for the Taiwan carve-out.
    ///
    /// ```
    /// use xpath_messages::i18n::{Locale, LocaleResolver};
    /// assert_eq!(LocaleResolver::suffix_for(&Locale::new("zh", Some("TW"))), "_zh_TW");
    /// assert_eq!(LocaleResolver::suffix_for(&Locale::new("fr", Some("FR"))), "_fr");
    /// ```
    pub fn suffix_for(locale: &Locale) -> String {
        match locale.country() {
            Some(country) if COUNTRY_SUFFIXED.contains(&country) => {
                format!("_{}_{}", locale.language(), country)
            }
            _ => format!("_{}", locale.language()),
        }
    }

    fn fallback_for(&self, base_name: &str) -> String {
        self.fallback_bundle
            .clone()
            .unwrap_or_else(|| base_name.to_string())
    }

    /// Run the lookup chain and report which bundle answered.
    pub fn trace(&self, base_name: &str, locale: &Locale) -> Resolution {
        let exact = bundle_name(base_name, &Self::suffix_for(locale));
        if let Some(catalog) = self.registry.load(&exact) {
            return Resolution::Resolved {
                bundle: exact,
                catalog,
                fell_back: false,
            };
        }

        let fallback = self.fallback_for(base_name);
        log::debug!(
            "no bundle '{}' for locale {}, falling back to '{}'",
            exact,
            locale,
            fallback
        );
        if let Some(catalog) = self.registry.load(&fallback) {
            return Resolution::Resolved {
                bundle: fallback,
                catalog,
                fell_back: true,
            };
        }

        let mut tried = vec![exact];
        if !tried.contains(&fallback) {
            tried.push(fallback);
        }
        let err = CatalogError::CatalogUnavailable {
            base_name: base_name.to_string(),
            tried,
        };
        log::warn!("{}", err);
        Resolution::Failed(err)
    }

    /// Catalog for `locale`, falling back once.
    pub fn resolve(&self, base_name: &str, locale: &Locale) -> CatalogResult<Arc<MessageCatalog>> {
        self.trace(base_name, locale).into_result()
    }

    /// Catalog for [`Locale::process_default`].
    pub fn resolve_default(&self, base_name: &str) -> CatalogResult<Arc<MessageCatalog>> {
        self.resolve(base_name, &Locale::process_default())
    }

    /// The fallback catalog alone, used as the second lookup level for keys.
    pub fn resolve_fallback(&self, base_name: &str) -> CatalogResult<Arc<MessageCatalog>> {
        let fallback = self.fallback_for(base_name);
        self.registry
            .load(&fallback)
            .ok_or_else(|| CatalogError::CatalogUnavailable {
                base_name: base_name.to_string(),
                tried: vec![fallback],
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::registry::DEFAULT_BASE_NAME;
    use crate::keys::ER_EMPTY_EXPRESSION;

    #[test]
    fn suffix_is_language_only_except_taiwan() {
        let zh_tw = Locale::new("zh", Some("TW"));
        assert_eq!(LocaleResolver::suffix_for(&zh_tw), "_zh_TW");
        assert_eq!(LocaleResolver::suffix_for(&zh_tw), LocaleResolver::suffix_for(&zh_tw));
        assert_eq!(LocaleResolver::suffix_for(&Locale::new("zh", Some("CN"))), "_zh");
        assert_eq!(LocaleResolver::suffix_for(&Locale::new("fr", Some("FR"))), "_fr");
        assert_eq!(LocaleResolver::suffix_for(&Locale::new("de", None)), "_de");
    }

    #[test]
    fn exact_bundle_wins() {
        let registry = CatalogRegistry::with_builtin();
        let resolution =
            LocaleResolver::new(&registry).trace(DEFAULT_BASE_NAME, &Locale::new("cs", Some("CZ")));
        assert_eq!(resolution.bundle(), Some("xpath_errors_cs"));
        let catalog = resolution.into_result().unwrap();
        assert_eq!(catalog.get(ER_EMPTY_EXPRESSION).unwrap(), "Prázdný výraz!");
    }

    #[test]
    fn unknown_locale_falls_back_to_base() {
        let registry = CatalogRegistry::with_builtin();
        let resolution =
            LocaleResolver::new(&registry).trace(DEFAULT_BASE_NAME, &Locale::new("xx", None));
        match &resolution {
            Resolution::Resolved { bundle, fell_back, .. } => {
                assert_eq!(bundle, DEFAULT_BASE_NAME);
                assert!(*fell_back);
            }
            other => panic!("expected fallback resolution, got {:?}", other),
        }
    }

    #[test]
    fn configured_fallback_is_used() {
        let registry = CatalogRegistry::with_builtin();
        let catalog = LocaleResolver::new(&registry)
            .with_fallback("xpath_errors_de")
            .resolve(DEFAULT_BASE_NAME, &Locale::new("xx", None))
            .unwrap();
        assert_eq!(catalog.locale_tag(), "de");
    }

    #[test]
    fn missing_fallback_is_fatal() {
        let registry = CatalogRegistry::new();
        let err = LocaleResolver::new(&registry)
            .resolve("msgs", &Locale::new("de", None))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::CatalogUnavailable {
                base_name: "msgs".to_string(),
                tried: vec!["msgs_de".to_string(), "msgs".to_string()],
            }
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn default_resolution_follows_process_locale() {
        let registry = CatalogRegistry::with_builtin();
        let resolver = LocaleResolver::new(&registry);
        let by_default = resolver.resolve_default(DEFAULT_BASE_NAME).unwrap();
        let explicit = resolver
            .resolve(DEFAULT_BASE_NAME, &Locale::process_default())
            .unwrap();
        assert_eq!(by_default.locale_tag(), explicit.locale_tag());
    }

    #[test]
    fn unresolved_is_the_initial_state() {
        let state = Resolution::default();
        assert!(!state.is_resolved());
        assert!(state.bundle().is_none());
        assert!(state.into_result().is_err());
    }
}
