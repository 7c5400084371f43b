// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration.
//!
//! Optional YAML (or JSON) file:
//!
//! ```yaml
//! base_name: xpath_errors
//! locale: de_DE
//! fallback_bundle: xpath_errors
//! ```
//!
//! Locale precedence, first match wins: explicit CLI flag,
//! `XPATH_MESSAGES_LOCALE`, the config file, `LC_ALL`/`LC_MESSAGES`/`LANG`,
//! then English.

use crate::i18n::{CatalogRegistry, Locale, LocaleResolver, DEFAULT_BASE_NAME};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessagesConfig {
    pub base_name: String,
    pub locale: Option<String>,
    /// Bundle used when the locale has none. Defaults to `base_name`.
    pub fallback_bundle: Option<String>,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            locale: None,
            fallback_bundle: None,
        }
    }
}

impl MessagesConfig {
    /// Load from `path`. JSON when the extension is `.json`, YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let config: MessagesConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_name.trim().is_empty() {
            return Err(anyhow!("base_name must not be empty"));
        }
        if let Some(tag) = &self.locale {
            Locale::parse(tag).ok_or_else(|| anyhow!("config locale '{}' is not a locale tag", tag))?;
        }
        Ok(())
    }

    /// Bundle to fall back to when the locale has no bundle of its own.
    pub fn fallback_bundle(&self) -> &str {
        self.fallback_bundle.as_deref().unwrap_or(&self.base_name)
    }

    /// Resolver over `registry` honouring the configured fallback.
    pub fn resolver<'a>(&self, registry: &'a CatalogRegistry) -> LocaleResolver<'a> {
        LocaleResolver::new(registry).with_fallback(self.fallback_bundle())
    }

    /// Effective locale given an optional CLI override.
    pub fn effective_locale(&self, cli: Option<&str>) -> Result<Locale> {
        self.effective_locale_with(cli, |name| env::var(name).ok())
    }

    /// [`MessagesConfig::effective_locale`] with an injectable environment.
    pub fn effective_locale_with<F>(&self, cli: Option<&str>, env_lookup: F) -> Result<Locale>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tag) = cli {
            return tag
                .parse::<Locale>()
                .with_context(|| format!("--locale {}", tag));
        }
        if let Some(locale) = Locale::from_override_var(&env_lookup) {
            return Ok(locale);
        }
        if let Some(locale) = self.locale.as_deref().and_then(Locale::parse) {
            return Ok(locale);
        }
        Ok(Locale::process_default_with(env_lookup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LOCALE_ENV_VAR;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |name: &str| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_use_base_name_as_fallback() {
        let config = MessagesConfig::default();
        assert_eq!(config.base_name, "xpath_errors");
        assert_eq!(config.fallback_bundle(), "xpath_errors");
    }

    #[test]
    fn cli_flag_wins() {
        let config = MessagesConfig {
            locale: Some("fr".to_string()),
            ..MessagesConfig::default()
        };
        let env = env_of(&[(LOCALE_ENV_VAR, "de"), ("LANG", "pl_PL.UTF-8")]);
        let locale = config.effective_locale_with(Some("sk"), env).unwrap();
        assert_eq!(locale, Locale::new("sk", None));
    }

    #[test]
    fn env_override_beats_config_file() {
        let config = MessagesConfig {
            locale: Some("fr".to_string()),
            ..MessagesConfig::default()
        };
        let env = env_of(&[(LOCALE_ENV_VAR, "de_AT"), ("LANG", "pl_PL.UTF-8")]);
        let locale = config.effective_locale_with(None, env).unwrap();
        assert_eq!(locale, Locale::new("de", Some("AT")));
    }

    #[test]
    fn blank_env_override_defers_to_config_file() {
        let config = MessagesConfig {
            locale: Some("fr".to_string()),
            ..MessagesConfig::default()
        };
        let env = env_of(&[(LOCALE_ENV_VAR, " "), ("LC_ALL", "pl_PL.UTF-8")]);
        let locale = config.effective_locale_with(None, env).unwrap();
        assert_eq!(locale, Locale::new("fr", None));
    }

    #[test]
    fn config_file_beats_platform_locale() {
        let config = MessagesConfig {
            locale: Some("fr".to_string()),
            ..MessagesConfig::default()
        };
        let locale = config
            .effective_locale_with(None, env_of(&[("LANG", "pl_PL.UTF-8")]))
            .unwrap();
        assert_eq!(locale, Locale::new("fr", None));
    }

    #[test]
    fn platform_then_english() {
        let config = MessagesConfig::default();
        let locale = config
            .effective_locale_with(None, env_of(&[("LC_ALL", "hu_HU.UTF-8")]))
            .unwrap();
        assert_eq!(locale, Locale::new("hu", Some("HU")));
        let locale = config.effective_locale_with(None, env_of(&[("LANG", "C")])).unwrap();
        assert_eq!(locale, Locale::english());
    }

    #[test]
    fn invalid_cli_locale_is_an_error() {
        let err = MessagesConfig::default()
            .effective_locale_with(Some("C"), env_of(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("--locale C"));
    }
}
