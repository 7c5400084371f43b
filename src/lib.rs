// SPDX-License-Identifier: PMPL-1.0-or-later

//! xpath-messages: localized diagnostic messages for an XPath evaluator.
//!
//! The evaluator raises a diagnostic by stable key (`ER_UNKNOWN_AXIS`) and
//! positional arguments. This crate picks the catalog for the runtime
//! locale, falls back to English where a locale or a key is missing, and
//! renders the final text.
//!
//! COMPONENTS:
//! 1. **Catalogs**: compiled-in per-locale tables (`cs`, `de`, `fr`, `hu`,
//!    `ja`, `ko`, `pl`, `sk`, `sl`, `tr`) plus the English base.
//! 2. **Resolution**: locale suffix computation and a two-level bundle
//!    lookup with a single fallback hop.
//! 3. **Rendering**: `MessageFormat`-style `{N}` substitution and the
//!    localized warning/error headers.
//! 4. **Audit**: coverage and placeholder consistency across locales.
//!
//! ```
//! use xpath_messages::i18n::{CatalogRegistry, Locale, XPathMessages, DEFAULT_BASE_NAME};
//! use xpath_messages::keys::ER_EMPTY_EXPRESSION;
//!
//! let registry = CatalogRegistry::with_builtin();
//! let cs = XPathMessages::for_locale(&registry, DEFAULT_BASE_NAME, &Locale::new("cs", None)).unwrap();
//! assert_eq!(cs.create_message(ER_EMPTY_EXPRESSION, &[]).unwrap(), "Prázdný výraz!");
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod keys;
pub mod report;

pub use error::{CatalogError, CatalogResult};
