// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compiled-in message tables, one per shipped locale.
//!
//! Each table is a plain `(key, template)` list in source order. Tables are
//! allowed to assign a key more than once; the catalog built from a table
//! keeps the last assignment and records the key as a duplicate.

mod cs;
mod de;
mod en;
mod fr;
mod hu;
mod ja;
mod ko;
mod pl;
mod sk;
mod sl;
mod tr;

pub(crate) type Table = &'static [(&'static str, &'static str)];

/// Language of the base table, registered under the bare base name.
pub(crate) const BASE_LANGUAGE: &str = "en";

/// `(language, table)` for every shipped locale. The base table comes first.
pub(crate) const BUILTIN: &[(&str, Table)] = &[
    ("en", en::TABLE),
    ("cs", cs::TABLE),
    ("de", de::TABLE),
    ("fr", fr::TABLE),
    ("hu", hu::TABLE),
    ("ja", ja::TABLE),
    ("ko", ko::TABLE),
    ("pl", pl::TABLE),
    ("sk", sk::TABLE),
    ("sl", sl::TABLE),
    ("tr", tr::TABLE),
];

pub(crate) fn table_for(language: &str) -> Option<Table> {
    BUILTIN
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, table)| *table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::format::placeholders;
    use crate::keys::{
        ERROR_KEYS, ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER,
        ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, UI_KEYS, WARNING_KEYS,
    };
    use std::collections::{BTreeSet, HashMap};

    fn as_map(table: Table) -> HashMap<&'static str, &'static str> {
        table.iter().copied().collect()
    }

    #[test]
    fn all_tables_same_entry_count_as_english() {
        let en_count = en::TABLE.len();
        for (code, table) in BUILTIN {
            assert_eq!(table.len(), en_count, "{} table entry count mismatch", code);
        }
    }

    #[test]
    fn english_covers_every_declared_key_once() {
        let keys: BTreeSet<&str> = en::TABLE.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), en::TABLE.len(), "english table has duplicates");
        for key in ERROR_KEYS.iter().chain(WARNING_KEYS).chain(UI_KEYS) {
            assert!(keys.contains(key), "english table is missing {}", key);
        }
    }

    #[test]
    fn translations_cover_english_except_as_node_iterator() {
        for (code, table) in BUILTIN.iter().skip(1) {
            let map = as_map(*table);
            for (key, _) in en::TABLE {
                if *key == ER_ASNODEITERATOR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER {
                    assert!(!map.contains_key(key), "{} unexpectedly defines {}", code, key);
                    continue;
                }
                assert!(map.contains_key(key), "{} is missing {}", code, key);
            }
        }
    }

    #[test]
    fn translations_assign_rtf_key_twice() {
        for (code, table) in BUILTIN.iter().skip(1) {
            let hits: Vec<&str> = table
                .iter()
                .filter(|(k, _)| *k == ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER)
                .map(|(_, v)| *v)
                .collect();
            assert_eq!(hits.len(), 2, "{}", code);
            assert!(hits[0].contains("rtf()"), "{}: {}", code, hits[0]);
            assert!(hits[1].contains("asNodeIterator()"), "{}: {}", code, hits[1]);
        }
    }

    #[test]
    fn translated_placeholders_match_english() {
        let english = as_map(en::TABLE);
        for (code, table) in BUILTIN.iter().skip(1) {
            for (key, template) in as_map(*table) {
                assert_eq!(
                    placeholders(template),
                    placeholders(english[key]),
                    "{} placeholder mismatch for {}",
                    code,
                    key
                );
            }
        }
    }

    #[test]
    fn ui_language_matches_table_code() {
        for (code, table) in BUILTIN {
            assert_eq!(as_map(*table)[crate::keys::LANGUAGE], *code);
        }
    }

    #[test]
    fn table_for_finds_shipped_languages() {
        assert!(table_for("sk").is_some());
        assert!(table_for(BASE_LANGUAGE).is_some());
        assert!(table_for("xx").is_none());
    }
}
