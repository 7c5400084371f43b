// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 names for the languages that have message catalogs.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// `(code, English name, native name)`.
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("cs", "Czech", "Čeština"),
    ("de", "German", "Deutsch"),
    ("en", "English", "English"),
    ("fr", "French", "Français"),
    ("hu", "Hungarian", "Magyar"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("pl", "Polish", "Polski"),
    ("sk", "Slovak", "Slovenčina"),
    ("sl", "Slovenian", "Slovenščina"),
    ("tr", "Turkish", "Türkçe"),
];

fn entry(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    LANGUAGES.iter().find(|(c, _, _)| *c == code)
}

/// English name of an ISO 639-1 code. Case-sensitive, as the codes are.
pub fn language_name(code: &str) -> Option<&'static str> {
    entry(code).map(|(_, english, _)| *english)
}

/// Name of the language written in that language.
pub fn native_name(code: &str) -> Option<&'static str> {
    entry(code).map(|(_, _, native)| *native)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tables::BUILTIN;

    #[test]
    fn every_shipped_locale_is_named() {
        for (code, _) in BUILTIN {
            assert!(language_name(code).is_some(), "no English name for {}", code);
            assert!(native_name(code).is_some(), "no native name for {}", code);
        }
        assert_eq!(LANGUAGES.len(), BUILTIN.len());
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("sl"), Some("Slovenian"));
        assert_eq!(native_name("ja"), Some("日本語"));
        assert_eq!(native_name("tr"), Some("Türkçe"));
    }

    #[test]
    fn unknown_and_uppercase_codes_rejected() {
        assert_eq!(language_name("xx"), None);
        assert_eq!(language_name("zh"), None);
        assert_eq!(language_name("DE"), None);
        assert_eq!(native_name(""), None);
    }
}
