// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message rendering for an XPath engine.
//!
//! An [`XPathMessages`] pairs the catalog resolved for a locale with the
//! default catalog. Keys missing from the first are looked up once in the
//! second; arguments are substituted only when some are given, so a
//! template rendered without arguments comes back verbatim (quotes and all).

use super::catalog::MessageCatalog;
use super::format::format;
use super::locale::Locale;
use super::registry::CatalogRegistry;
use super::resolver::LocaleResolver;
use crate::error::{CatalogError, CatalogResult};
use crate::keys::{ERROR_HEADER, FORMAT_FAILED, WARNING_HEADER};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct XPathMessages {
    resolved: Arc<MessageCatalog>,
    default: Arc<MessageCatalog>,
}

impl XPathMessages {
    pub fn new(resolved: Arc<MessageCatalog>, default: Arc<MessageCatalog>) -> Self {
        Self { resolved, default }
    }

    /// Resolve `locale` against `registry` with the standard fallback.
    pub fn for_locale(
        registry: &CatalogRegistry,
        base_name: &str,
        locale: &Locale,
    ) -> CatalogResult<Self> {
        Self::with_resolver(&LocaleResolver::new(registry), base_name, locale)
    }

    /// Same as [`XPathMessages::for_locale`] for [`Locale::process_default`].
    pub fn for_default_locale(registry: &CatalogRegistry, base_name: &str) -> CatalogResult<Self> {
        Self::for_locale(registry, base_name, &Locale::process_default())
    }

    pub fn with_resolver(
        resolver: &LocaleResolver<'_>,
        base_name: &str,
        locale: &Locale,
    ) -> CatalogResult<Self> {
        let resolved = resolver.resolve(base_name, locale)?;
        let default = match resolver.resolve_fallback(base_name) {
            Ok(default) => default,
            Err(err) => {
                log::debug!("{}; keys missing from {} have no second lookup", err, locale);
                Arc::clone(&resolved)
            }
        };
        Ok(Self::new(resolved, default))
    }

    /// Locale tag of the resolved catalog.
    pub fn locale_tag(&self) -> &str {
        self.resolved.locale_tag()
    }

    pub fn resolved(&self) -> &MessageCatalog {
        &self.resolved
    }

    pub fn default_catalog(&self) -> &MessageCatalog {
        &self.default
    }

    /// Template for `key`: resolved catalog first, default catalog second.
    ///
    /// On a miss in both, the error names the resolved locale.
    pub fn template(&self, key: &str) -> CatalogResult<&str> {
        match self.resolved.get(key) {
            Ok(template) => Ok(template),
            Err(err) if err.is_recoverable() => {
                log::debug!(
                    "'{}' missing from {}, trying {}",
                    key,
                    self.resolved.locale_tag(),
                    self.default.locale_tag()
                );
                self.default.get(key).map_err(|_| err)
            }
            Err(err) => Err(err),
        }
    }

    /// Render `key` with positional `args`.
    ///
    /// ```
    /// use xpath_messages::i18n::{CatalogRegistry, Locale, XPathMessages};
    /// use xpath_messages::keys::ER_UNKNOWN_AXIS;
    /// let registry = CatalogRegistry::with_builtin();
    /// let messages = XPathMessages::for_locale(&registry, "xpath_errors", &Locale::english()).unwrap();
    /// assert_eq!(messages.create_message(ER_UNKNOWN_AXIS, &[&"sideways"]).unwrap(), "unknown axis: sideways");
    /// ```
    pub fn create_message(&self, key: &str, args: &[&dyn fmt::Display]) -> CatalogResult<String> {
        let template = self.template(key)?;
        self.render(key, template, args)
    }

    /// [`XPathMessages::create_message`] prefixed with the localized warning header.
    pub fn create_warning(&self, key: &str, args: &[&dyn fmt::Display]) -> CatalogResult<String> {
        let body = self.create_message(key, args)?;
        Ok(format!("{}{}", self.ui(WARNING_HEADER), body))
    }

    /// [`XPathMessages::create_message`] prefixed with the localized error header.
    pub fn create_error(&self, key: &str, args: &[&dyn fmt::Display]) -> CatalogResult<String> {
        let body = self.create_message(key, args)?;
        Ok(format!("{}{}", self.ui(ERROR_HEADER), body))
    }

    /// Render `key`, never failing.
    ///
    /// A malformed template yields the localized format-failure text. A key
    /// that no catalog defines yields the key itself with the arguments
    /// appended, so the diagnostic is never lost.
    pub fn render_or_key(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        match self.create_message(key, args) {
            Ok(message) => message,
            Err(CatalogError::Format { message, .. }) => message,
            Err(err) => {
                log::warn!("{}", err);
                key_with_args(key, args)
            }
        }
    }

    /// UI string for `key`, or `key` itself when no catalog defines it.
    pub fn ui<'a>(&'a self, key: &'a str) -> &'a str {
        self.template(key).unwrap_or(key)
    }

    fn render(&self, key: &str, template: &str, args: &[&dyn fmt::Display]) -> CatalogResult<String> {
        if args.is_empty() {
            return Ok(template.to_string());
        }
        format(template, args).map_err(|err| {
            log::warn!("cannot format '{}' in {}: {}", key, self.locale_tag(), err);
            CatalogError::Format {
                key: key.to_string(),
                message: format!("{} {}", self.ui(FORMAT_FAILED), template),
            }
        })
    }
}

fn key_with_args(key: &str, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() {
        return key.to_string();
    }
    let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    format!("{} [{}]", key, rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::registry::DEFAULT_BASE_NAME;
    use crate::keys::*;

    fn messages(tag: &str) -> XPathMessages {
        let registry = CatalogRegistry::with_builtin();
        let locale = Locale::parse(tag).unwrap();
        XPathMessages::for_locale(&registry, DEFAULT_BASE_NAME, &locale).unwrap()
    }

    #[test]
    fn renders_in_resolved_locale() {
        let de = messages("de_DE");
        assert_eq!(de.locale_tag(), "de");
        assert_eq!(de.create_message(ER_UNKNOWN_AXIS, &[&"up"]).unwrap(), "Unbekannte Achse: up");
    }

    #[test]
    fn no_args_returns_template_verbatim() {
        let en = messages("en");
        assert_eq!(
            en.create_message(ER_PREDICATE_ILLEGAL_SYNTAX, &[]).unwrap(),
            en.resolved().get(ER_PREDICATE_ILLEGAL_SYNTAX).unwrap()
        );
        assert_eq!(en.create_message(ER_UNKNOWN_AXIS, &[]).unwrap(), "unknown axis: {0}");
    }

    #[test]
    fn missing_translation_falls_back_to_default() {
        let ja = messages("ja");
        assert_eq!(
            ja.create_message(ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, &[])
                .unwrap(),
            "asNodeIterator() not supported by XRTreeFragSelectWrapper"
        );
    }

    #[test]
    fn unknown_key_is_not_found_in_resolved_locale() {
        let de = messages("de");
        let err = de.create_message("ER_DOES_NOT_EXIST", &[]).unwrap_err();
        assert_eq!(err, CatalogError::key_not_found("ER_DOES_NOT_EXIST", "de"));
    }

    #[test]
    fn headers_are_localized() {
        let cs = messages("cs");
        assert_eq!(cs.create_error(ER_EMPTY_EXPRESSION, &[]).unwrap(), "Chyba: Prázdný výraz!");
        assert_eq!(
            cs.create_warning(WG_UNSUPPORTED_ENCODING, &[&"EBCDIC"]).unwrap(),
            format!("{}{}", cs.ui(WARNING_HEADER), "Nepodporované kódování: EBCDIC")
        );
    }

    #[test]
    fn render_or_key_surfaces_untranslated_key() {
        let fr = messages("fr");
        assert_eq!(fr.render_or_key("ER_DOES_NOT_EXIST", &[]), "ER_DOES_NOT_EXIST");
        assert_eq!(
            fr.render_or_key("ER_DOES_NOT_EXIST", &[&"a", &2]),
            "ER_DOES_NOT_EXIST [a, 2]"
        );
    }

    #[test]
    fn malformed_template_reports_format_failure() {
        let catalog = Arc::new(MessageCatalog::from_pairs(
            "en",
            [("ER_BROKEN", "broken {0"), (FORMAT_FAILED, "Exception thrown during messageFormat call")],
        ));
        let messages = XPathMessages::new(Arc::clone(&catalog), catalog);
        let err = messages.create_message("ER_BROKEN", &[&1]).unwrap_err();
        assert!(matches!(err, CatalogError::Format { ref key, .. } if key == "ER_BROKEN"));
        assert_eq!(
            messages.render_or_key("ER_BROKEN", &[&1]),
            "Exception thrown during messageFormat call broken {0"
        );
        // Without arguments the template is never parsed.
        assert_eq!(messages.create_message("ER_BROKEN", &[]).unwrap(), "broken {0");
    }

    #[test]
    fn ui_strings_share_the_lookup() {
        let pl = messages("pl");
        assert_eq!(pl.ui(LANGUAGE), "pl");
        assert_eq!(pl.ui("no-such-ui-key"), "no-such-ui-key");
    }

    #[test]
    fn default_locale_always_renders() {
        let registry = CatalogRegistry::with_builtin();
        let messages = XPathMessages::for_default_locale(&registry, DEFAULT_BASE_NAME).unwrap();
        let expected = LocaleResolver::new(&registry)
            .resolve(DEFAULT_BASE_NAME, &Locale::process_default())
            .unwrap();
        assert_eq!(messages.locale_tag(), expected.locale_tag());
        assert_eq!(messages.default_catalog().locale_tag(), "en");
        assert!(!messages.create_message(ER_EMPTY_EXPRESSION, &[]).unwrap().is_empty());
    }

    #[test]
    fn default_catalog_is_english() {
        let tr = messages("tr_TR.UTF-8");
        assert_eq!(tr.default_catalog().locale_tag(), "en");
        assert_eq!(tr.locale_tag(), "tr");
    }
}
