// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized diagnostic messages for an XPath evaluator.
//!
//! The engine raises a diagnostic by key plus positional arguments; this
//! module turns it into text in the resolved locale.
//!
//! ## Supported locales
//!
//! | Code | Language   | Bundle            |
//! |------|------------|-------------------|
//! | en   | English    | `xpath_errors`, `xpath_errors_en` |
//! | cs   | Czech      | `xpath_errors_cs` |
//! | de   | German     | `xpath_errors_de` |
//! | fr   | French     | `xpath_errors_fr` |
//! | hu   | Hungarian  | `xpath_errors_hu` |
//! | ja   | Japanese   | `xpath_errors_ja` |
//! | ko   | Korean     | `xpath_errors_ko` |
//! | pl   | Polish     | `xpath_errors_pl` |
//! | sk   | Slovak     | `xpath_errors_sk` |
//! | sl   | Slovenian  | `xpath_errors_sl` |
//! | tr   | Turkish    | `xpath_errors_tr` |
//!
//! ## Lookup
//!
//! A locale picks its bundle by suffix (`_de`; `_zh_TW` for Taiwan). A
//! missing bundle falls back once to the base bundle, English unless
//! configured otherwise. A key missing from the resolved catalog is looked
//! up once in the base catalog. Tables are compiled in; no file I/O happens
//! at lookup time.

pub mod catalog;
pub mod format;
mod iso639;
pub mod locale;
pub mod messages;
pub mod registry;
pub mod resolver;
pub(crate) mod tables;

pub use catalog::MessageCatalog;
pub use format::FormatError;
pub use iso639::{language_name, native_name};
pub use locale::{Locale, LocaleParseError, LOCALE_ENV_VAR};
pub use messages::XPathMessages;
pub use registry::{builtin_registry, bundle_name, CatalogRegistry, DEFAULT_BASE_NAME};
pub use resolver::{LocaleResolver, Resolution};
