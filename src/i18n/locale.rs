// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers and parsing.
//!
//! Accepts POSIX (`de_DE.UTF-8`, `sr_RS@latin`), BCP-47 (`de-DE`,
//! `zh-Hant-TW`) and bare (`de`) tags. The language is lowercased and the
//! country uppercased; script and variant subtags are dropped since only
//! language and country take part in bundle selection.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that overrides the platform locale for this crate.
pub const LOCALE_ENV_VAR: &str = "XPATH_MESSAGES_LOCALE";

/// Platform locale variables, in POSIX precedence order.
const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid locale tag '{0}'")]
pub struct LocaleParseError(pub String);

/// A `(language, country)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country
                .filter(|c| !c.is_empty())
                .map(|c| c.to_ascii_uppercase()),
        }
    }

    pub fn english() -> Self {
        Self::new("en", None)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Parse a locale tag. Returns `None` for empty tags and for the
    /// `C`/`POSIX` pseudo-locales, which name no language.
    ///
    /// ```
    /// use xpath_messages::i18n::Locale;
    /// let locale = Locale::parse("de_DE.UTF-8").unwrap();
    /// assert_eq!(locale.language(), "de");
    /// assert_eq!(locale.country(), Some("DE"));
    /// assert!(Locale::parse("C").is_none());
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX")
        {
            return None;
        }

        let mut subtags = tag.split(['_', '-']);
        let language = subtags.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let mut country = None;
        for subtag in subtags {
            if is_region(subtag) {
                country = Some(subtag);
                break;
            }
            // Script subtags such as `Hant` may precede the region.
            if subtag.len() != 4 {
                break;
            }
        }
        Some(Self::new(language, country))
    }

    /// Locale named by the first non-empty `LC_ALL`, `LC_MESSAGES` or `LANG`.
    pub fn from_posix_env() -> Option<Self> {
        Self::from_posix_vars(|name| env::var(name).ok())
    }

    /// Same as [`Locale::from_posix_env`] with an injectable variable source.
    pub fn from_posix_vars<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        POSIX_LOCALE_VARS
            .into_iter()
            .filter_map(lookup)
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(&value))
    }

    /// Locale named by `XPATH_MESSAGES_LOCALE`. Blank or unparseable values
    /// are ignored.
    pub fn from_override_var<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(LOCALE_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(&value))
    }

    /// Process default: `XPATH_MESSAGES_LOCALE`, then the POSIX variables,
    /// then English.
    pub fn process_default() -> Self {
        Self::process_default_with(|name| env::var(name).ok())
    }

    /// [`Locale::process_default`] with an injectable variable source.
    pub fn process_default_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_override_var(&lookup)
            .or_else(|| Self::from_posix_vars(&lookup))
            .unwrap_or_else(Self::english)
    }
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_posix_bcp47_and_bare_tags() {
        assert_eq!(Locale::parse("de_DE.UTF-8"), Some(Locale::new("de", Some("DE"))));
        assert_eq!(Locale::parse("de-de"), Some(Locale::new("de", Some("DE"))));
        assert_eq!(Locale::parse("DE"), Some(Locale::new("de", None)));
        assert_eq!(Locale::parse("sr_RS@latin"), Some(Locale::new("sr", Some("RS"))));
        assert_eq!(Locale::parse("zh-Hant-TW"), Some(Locale::new("zh", Some("TW"))));
        assert_eq!(Locale::parse("es-419"), Some(Locale::new("es", Some("419"))));
    }

    #[test]
    fn rejects_pseudo_and_malformed_tags() {
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("C"), None);
        assert_eq!(Locale::parse("C.UTF-8"), None);
        assert_eq!(Locale::parse("POSIX"), None);
        assert_eq!(Locale::parse("english"), None);
        assert_eq!(Locale::parse("d3"), None);
        assert!("??".parse::<Locale>().is_err());
    }

    #[test]
    fn display_joins_language_and_country() {
        assert_eq!(Locale::new("zh", Some("tw")).to_string(), "zh_TW");
        assert_eq!(Locale::new("FR", None).to_string(), "fr");
        assert_eq!(Locale::new("fr", Some("")).country(), None);
    }

    #[test]
    fn posix_vars_follow_precedence() {
        let vars: HashMap<&str, &str> =
            [("LC_ALL", ""), ("LC_MESSAGES", "pl_PL.UTF-8"), ("LANG", "de_DE.UTF-8")]
                .into_iter()
                .collect();
        let locale = Locale::from_posix_vars(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(locale, Some(Locale::new("pl", Some("PL"))));
    }

    #[test]
    fn posix_c_locale_names_no_language() {
        let locale = Locale::from_posix_vars(|name| (name == "LANG").then(|| "C".to_string()));
        assert_eq!(locale, None);
        assert_eq!(Locale::from_posix_vars(|_| None), None);
    }

    fn env_of(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |name: &str| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn override_var_beats_lc_all() {
        let lookup = env_of(&[(LOCALE_ENV_VAR, "sk"), ("LC_ALL", "hu_HU.UTF-8")]);
        assert_eq!(Locale::process_default_with(lookup), Locale::new("sk", None));
    }

    #[test]
    fn blank_override_is_skipped() {
        let lookup = env_of(&[(LOCALE_ENV_VAR, "  "), ("LC_ALL", "hu_HU.UTF-8")]);
        assert_eq!(Locale::process_default_with(lookup), Locale::new("hu", Some("HU")));
        assert_eq!(Locale::from_override_var(env_of(&[(LOCALE_ENV_VAR, "")])), None);
    }

    #[test]
    fn c_locale_falls_through_to_english() {
        let lookup = env_of(&[(LOCALE_ENV_VAR, "C"), ("LANG", "C.UTF-8")]);
        assert_eq!(Locale::process_default_with(lookup), Locale::english());
        assert_eq!(Locale::process_default_with(env_of(&[])), Locale::english());
    }
}
