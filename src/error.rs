// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for catalog lookup and message rendering.
//!
//! Lookups distinguish a recoverable miss (the key is absent from one
//! catalog, try the fallback) from a fatal one (no catalog could be
//! resolved at all). Neither is the XPath error itself; that belongs to
//! the engine which asked for the message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The key is not defined in the catalog for `locale`.
    #[error("message key '{key}' not found in catalog '{locale}'")]
    KeyNotFound { key: String, locale: String },

    /// Neither the requested bundle nor the fallback bundle is registered.
    #[error("could not load any message catalog for '{base_name}' (tried: {})", tried.join(", "))]
    CatalogUnavailable { base_name: String, tried: Vec<String> },

    /// The template for `key` is malformed and could not be formatted.
    #[error("{message}")]
    Format { key: String, message: String },
}

impl CatalogError {
    pub fn key_not_found(key: &str, locale: &str) -> Self {
        CatalogError::KeyNotFound {
            key: key.to_string(),
            locale: locale.to_string(),
        }
    }

    /// `true` when the caller should retry the lookup in another catalog.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::KeyNotFound { .. })
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_key_not_found_is_recoverable() {
        assert!(CatalogError::key_not_found("ER_X", "de").is_recoverable());
        let fatal = CatalogError::CatalogUnavailable {
            base_name: "xpath_errors".to_string(),
            tried: vec!["xpath_errors_xx".to_string(), "xpath_errors".to_string()],
        };
        assert!(!fatal.is_recoverable());
        assert_eq!(
            fatal.to_string(),
            "could not load any message catalog for 'xpath_errors' (tried: xpath_errors_xx, xpath_errors)"
        );
    }

    #[test]
    fn key_not_found_display_names_key_and_locale() {
        let err = CatalogError::key_not_found("ER_DOES_NOT_EXIST", "de");
        assert_eq!(
            err.to_string(),
            "message key 'ER_DOES_NOT_EXIST' not found in catalog 'de'"
        );
    }
}
