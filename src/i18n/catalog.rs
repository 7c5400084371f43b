// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for one locale.
//!
//! A catalog is built once from a list of `(key, template)` pairs and is
//! read-only afterwards. Error keys, warning keys and UI strings all live in
//! the same table and share the same lookup.
//!
//! ## Duplicate keys
//!
//! Source tables occasionally assign a key twice. The later assignment wins,
//! matching table construction order, and the key is remembered in
//! [`MessageCatalog::duplicate_keys`] so the audit can report it.

use crate::error::{CatalogError, CatalogResult};
use std::collections::{BTreeSet, HashMap};

/// Immutable `key -> template` table for exactly one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locale_tag: String,
    entries: HashMap<String, String>,
    duplicates: BTreeSet<String>,
}

impl MessageCatalog {
    /// Build a catalog from `(key, template)` pairs. Last write wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use xpath_messages::i18n::MessageCatalog;
    /// let catalog = MessageCatalog::from_pairs("de", [("ER_X", "alt"), ("ER_X", "neu")]);
    /// assert_eq!(catalog.get("ER_X").unwrap(), "neu");
    /// assert!(catalog.duplicate_keys().contains("ER_X"));
    /// ```
    pub fn from_pairs<I, K, V>(locale_tag: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        let mut duplicates = BTreeSet::new();
        for (key, template) in pairs {
            let key = key.into();
            if entries.contains_key(&key) {
                duplicates.insert(key.clone());
            }
            entries.insert(key, template.into());
        }
        Self {
            locale_tag: locale_tag.into(),
            entries,
            duplicates,
        }
    }

    /// Locale tag this catalog was built for (`"de"`, `"zh_TW"`, `"en"`).
    pub fn locale_tag(&self) -> &str {
        &self.locale_tag
    }

    /// Template for `key`, or [`CatalogError::KeyNotFound`].
    ///
    /// A miss is recoverable: callers are expected to retry in the
    /// fallback catalog rather than give up.
    pub fn get(&self, key: &str) -> CatalogResult<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::key_not_found(key, &self.locale_tag))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All `(key, template)` pairs, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Keys that the source table assigned more than once.
    pub fn duplicate_keys(&self) -> &BTreeSet<String> {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, ER_EMPTY_EXPRESSION};

    fn sample() -> MessageCatalog {
        MessageCatalog::from_pairs(
            "cs",
            vec![
                ("ER_EMPTY_EXPRESSION", "Prázdný výraz!"),
                ("ER_UNKNOWN_AXIS", "neznámá osa: {0}"),
                ("line", "Řádek #"),
            ],
        )
    }

    #[test]
    fn get_returns_exactly_the_constructed_template() {
        let pairs = [
            ("ER_EMPTY_EXPRESSION", "Prázdný výraz!"),
            ("ER_UNKNOWN_AXIS", "neznámá osa: {0}"),
            ("line", "Řádek #"),
        ];
        let catalog = sample();
        for (key, template) in pairs {
            assert_eq!(catalog.get(key).unwrap(), template);
        }
        assert_eq!(catalog.len(), pairs.len());
        assert!(catalog.duplicate_keys().is_empty());
    }

    #[test]
    fn missing_key_is_recoverable_not_found() {
        let err = sample().get("ER_DOES_NOT_EXIST").unwrap_err();
        assert_eq!(err, CatalogError::key_not_found("ER_DOES_NOT_EXIST", "cs"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn last_write_wins_on_duplicate_keys() {
        let catalog = MessageCatalog::from_pairs(
            "de",
            [
                ("ER_RTF", "rtf() nicht unterstützt"),
                ("ER_OTHER", "x"),
                ("ER_RTF", "asNodeIterator() nicht unterstützt"),
            ],
        );
        assert_eq!(catalog.get("ER_RTF").unwrap(), "asNodeIterator() nicht unterstützt");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.duplicate_keys().iter().collect::<Vec<_>>(),
            vec!["ER_RTF"]
        );
    }

    #[test]
    fn keys_and_entries_are_sorted() {
        let catalog = sample();
        assert_eq!(catalog.keys(), vec!["ER_EMPTY_EXPRESSION", "ER_UNKNOWN_AXIS", "line"]);
        let entries = catalog.entries();
        assert_eq!(entries[0], ("ER_EMPTY_EXPRESSION", "Prázdný výraz!"));
        assert_eq!(entries[2], ("line", "Řádek #"));
    }

    #[test]
    fn empty_catalog() {
        let catalog = MessageCatalog::from_pairs("xx", Vec::<(String, String)>::new());
        assert!(catalog.is_empty());
        assert!(!catalog.contains(ER_EMPTY_EXPRESSION));
        assert_eq!(catalog.locale_tag(), "xx");
    }

    #[test]
    fn builtin_translation_lacks_as_node_iterator() {
        let table = crate::i18n::tables::table_for("fr").unwrap();
        let catalog = MessageCatalog::from_pairs("fr", table.iter().copied());
        assert!(!catalog.contains(ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER));
        assert_eq!(catalog.duplicate_keys().len(), 1);
        assert_eq!(catalog.len(), table.len() - 1);
    }
}
