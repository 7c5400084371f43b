// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use super::{AuditReport, CatalogListing, LocaleAudit, LocaleSummary, SuffixReport};
use colored::*;
use std::fmt::Write as _;

/// Missing keys listed per locale before the list is elided.
const MAX_LISTED_KEYS: usize = 8;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_listing(&self, listing: &CatalogListing) {
        print!("{}", self.render_listing(listing));
    }

    pub fn print_locales(&self, summaries: &[LocaleSummary]) {
        print!("{}", self.render_locales(summaries));
    }

    pub fn print_suffix(&self, report: &SuffixReport) {
        print!("{}", self.render_suffix(report));
    }

    pub fn print_audit(&self, report: &AuditReport) {
        print!("{}", self.render_audit(report));
    }

    pub fn render_listing(&self, listing: &CatalogListing) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} ({} entries)",
            listing.bundle.bold().cyan(),
            format!("[{}]", listing.locale).dimmed(),
            listing.entries.len()
        );
        let width = listing.entries.keys().map(String::len).max().unwrap_or(0);
        for (key, template) in &listing.entries {
            let _ = writeln!(out, "  {:width$}  {}", key.yellow(), template, width = width);
        }
        out
    }

    pub fn render_locales(&self, summaries: &[LocaleSummary]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "SHIPPED LOCALES".bold().yellow());
        for summary in summaries {
            let _ = writeln!(
                out,
                "  {:6} {:18} {:12} {:14} {} entries",
                summary.code.bold(),
                summary.bundle,
                summary.english_name.as_deref().unwrap_or("-"),
                summary.native_name.as_deref().unwrap_or("-"),
                summary.entries
            );
        }
        out
    }

    pub fn render_suffix(&self, report: &SuffixReport) -> String {
        let status = if report.registered {
            "registered".green()
        } else {
            "not registered, falls back".yellow()
        };
        format!(
            "{} -> {}  {} ({})\n",
            report.tag,
            report.suffix.bold(),
            report.bundle,
            status
        )
    }

    pub fn render_audit(&self, report: &AuditReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", "=== CATALOG AUDIT ===".bold().cyan());
        let _ = writeln!(
            out,
            "  Base: {} [{}], {} keys",
            report.base_name, report.base_locale, report.base_keys
        );
        let _ = writeln!(out);

        for locale in &report.locales {
            self.render_locale_audit(&mut out, locale);
        }

        let _ = writeln!(out, "{}", "SUMMARY".bold().yellow());
        let _ = writeln!(out, "  Locales: {}", report.locales.len());
        let _ = writeln!(out, "  Missing keys: {}", report.total_missing());
        let _ = writeln!(out, "  Duplicate assignments: {}", report.total_duplicates());
        if report.has_placeholder_mismatches() {
            let _ = writeln!(out, "  {}", "Placeholder mismatches found".red().bold());
        } else {
            let _ = writeln!(out, "  {}", "Placeholders consistent".green());
        }
        out
    }

    fn render_locale_audit(&self, out: &mut String, locale: &LocaleAudit) {
        let coverage_color = if locale.coverage >= 100.0 {
            "green"
        } else if locale.coverage >= 90.0 {
            "yellow"
        } else {
            "red"
        };
        let _ = writeln!(
            out,
            "{} {}: {}% of base keys, {} entries",
            locale.locale.bold(),
            format!("({})", locale.bundle).dimmed(),
            format!("{:.1}", locale.coverage).color(coverage_color).bold(),
            locale.keys
        );

        if !locale.missing_keys.is_empty() {
            let _ = writeln!(out, "  Missing: {}", list_keys(&locale.missing_keys));
        }
        if !locale.extra_keys.is_empty() {
            let _ = writeln!(out, "  Extra: {}", list_keys(&locale.extra_keys));
        }
        if !locale.duplicate_keys.is_empty() {
            let _ = writeln!(
                out,
                "  Assigned twice: {}",
                list_keys(&locale.duplicate_keys).yellow()
            );
        }
        for mismatch in &locale.placeholder_mismatches {
            let _ = writeln!(
                out,
                "  {} {} expects {:?}, found {:?}",
                "Placeholder mismatch:".red(),
                mismatch.key,
                mismatch.expected,
                mismatch.found
            );
        }
        let _ = writeln!(out);
    }
}

fn list_keys(keys: &[String]) -> String {
    if keys.len() <= MAX_LISTED_KEYS {
        return keys.join(", ");
    }
    format!(
        "{} (+{} more)",
        keys[..MAX_LISTED_KEYS].join(", "),
        keys.len() - MAX_LISTED_KEYS
    )
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{CatalogRegistry, Locale, DEFAULT_BASE_NAME};
    use crate::report::{audit, locale_summaries};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn audit_text_mentions_duplicates_and_summary() {
        plain();
        let report = audit(&CatalogRegistry::with_builtin(), DEFAULT_BASE_NAME).unwrap();
        let text = ReportFormatter::new().render_audit(&report);
        assert!(text.contains("=== CATALOG AUDIT ==="));
        assert!(text.contains("Assigned twice: ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER"));
        assert!(text.contains("Placeholders consistent"));
    }

    #[test]
    fn locales_text_lists_native_names() {
        plain();
        let registry = CatalogRegistry::with_builtin();
        let text = ReportFormatter::new().render_locales(&locale_summaries(&registry, DEFAULT_BASE_NAME));
        assert!(text.contains("Magyar"));
        assert!(text.contains("xpath_errors_ko"));
    }

    #[test]
    fn suffix_text_shows_fallback() {
        plain();
        let registry = CatalogRegistry::with_builtin();
        let locale = Locale::parse("xx").unwrap();
        let report = SuffixReport::new(&registry, DEFAULT_BASE_NAME, "xx", &locale);
        let text = ReportFormatter::new().render_suffix(&report);
        assert_eq!(text, "xx -> _xx  xpath_errors_xx (not registered, falls back)\n");
    }

    #[test]
    fn long_key_lists_are_elided() {
        let keys: Vec<String> = (0..10).map(|i| format!("K{}", i)).collect();
        assert_eq!(list_keys(&keys), "K0, K1, K2, K3, K4, K5, K6, K7 (+2 more)");
        assert_eq!(list_keys(&keys[..2]), "K0, K1");
    }
}
