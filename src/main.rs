// SPDX-License-Identifier: PMPL-1.0-or-later

//! xpath-messages: inspect and render localized XPath diagnostics.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fmt::Display;
use std::path::PathBuf;
use xpath_messages::config::MessagesConfig;
use xpath_messages::i18n::{CatalogRegistry, Locale, XPathMessages};
use xpath_messages::keys;
use xpath_messages::CatalogError;
use xpath_messages::report::{
    self, CatalogListing, ReportFormatter, ReportOutputFormat, SuffixReport,
};

#[derive(Parser)]
#[command(name = "xpath-messages")]
#[command(version)]
#[command(about = "Inspect and render localized XPath error messages")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one message
    Show {
        /// Message key, e.g. ER_UNKNOWN_AXIS
        #[arg(value_name = "KEY")]
        key: String,

        /// Positional arguments substituted for {0}, {1}, ...
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Locale tag (de, de_DE.UTF-8, zh-TW)
        #[arg(short, long)]
        locale: Option<String>,

        /// Prefix with the localized warning header instead of the error header
        #[arg(short, long)]
        warning: bool,

        /// Print the message without a severity header
        #[arg(long, conflicts_with = "warning")]
        bare: bool,
    },

    /// Dump every entry of the catalog a locale resolves to
    List {
        /// Locale tag
        #[arg(short, long)]
        locale: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,
    },

    /// List shipped locales
    Locales {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,
    },

    /// Print the bundle suffix a locale tag selects
    Suffix {
        /// Locale tag
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Check every locale against the base catalog
    Audit {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = MessagesConfig::load_or_default(cli.config.as_deref())?;
    let registry = CatalogRegistry::with_builtin_named(&config.base_name);
    let formatter = ReportFormatter::new();

    match cli.command {
        Commands::Show {
            key,
            args,
            locale,
            warning,
            bare,
        } => {
            let locale = config.effective_locale(locale.as_deref())?;
            let messages = messages_for(&config, &registry, &locale)?;
            let args: Vec<&dyn Display> = args.iter().map(|arg| arg as &dyn Display).collect();
            let header = if bare {
                Header::None
            } else if warning || keys::is_warning_key(&key) {
                Header::Warning
            } else {
                Header::Error
            };
            let (text, problem) = render_show(&messages, &key, &args, header);
            if let Some(err) = problem {
                eprintln!("{} {}", "warning:".yellow().bold(), err);
            }
            println!("{}", text);
        }

        Commands::List { locale, format } => {
            let locale = config.effective_locale(locale.as_deref())?;
            let resolution = config.resolver(&registry).trace(&config.base_name, &locale);
            let bundle = resolution
                .bundle()
                .map(str::to_string)
                .unwrap_or_default();
            let catalog = resolution.into_result()?;
            let listing = CatalogListing::new(&bundle, &catalog);
            match format {
                ReportOutputFormat::Text => formatter.print_listing(&listing),
                other => println!("{}", other.serialize(&listing)?),
            }
        }

        Commands::Locales { format } => {
            let summaries = report::locale_summaries(&registry, &config.base_name);
            match format {
                ReportOutputFormat::Text => formatter.print_locales(&summaries),
                other => println!("{}", other.serialize(&summaries)?),
            }
        }

        Commands::Suffix { tag } => {
            let locale: Locale = tag
                .parse()
                .with_context(|| format!("suffix for '{}'", tag))?;
            let report = SuffixReport::new(&registry, &config.base_name, &tag, &locale);
            formatter.print_suffix(&report);
        }

        Commands::Audit { format } => {
            let audit = report::audit(&registry, &config.base_name)?;
            match format {
                ReportOutputFormat::Text => formatter.print_audit(&audit),
                other => println!("{}", other.serialize(&audit)?),
            }
            if audit.has_placeholder_mismatches() {
                return Err(anyhow!("placeholder mismatches found"));
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    None,
    Warning,
    Error,
}

/// Text printed by `show`. Lookup and format failures degrade to
/// [`XPathMessages::render_or_key`]; the error comes back for reporting.
fn render_show(
    messages: &XPathMessages,
    key: &str,
    args: &[&dyn Display],
    header: Header,
) -> (String, Option<CatalogError>) {
    let rendered = match header {
        Header::None => messages.create_message(key, args),
        Header::Warning => messages.create_warning(key, args),
        Header::Error => messages.create_error(key, args),
    };
    match rendered {
        Ok(text) => (text, None),
        Err(err) => (messages.render_or_key(key, args), Some(err)),
    }
}

fn messages_for(
    config: &MessagesConfig,
    registry: &CatalogRegistry,
    locale: &Locale,
) -> Result<XPathMessages> {
    let resolver = config.resolver(registry);
    XPathMessages::with_resolver(&resolver, &config.base_name, locale)
        .with_context(|| format!("resolving messages for {}", locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use xpath_messages::i18n::MessageCatalog;
    use xpath_messages::keys::{ERROR_HEADER, ER_UNKNOWN_AXIS, FORMAT_FAILED};

    fn broken_catalog() -> XPathMessages {
        let catalog = Arc::new(MessageCatalog::from_pairs(
            "en",
            [
                ("ER_BROKEN", "broken {0"),
                (FORMAT_FAILED, "Exception thrown during messageFormat call"),
                (ERROR_HEADER, "Error: "),
                (ER_UNKNOWN_AXIS, "unknown axis: {0}"),
            ],
        ));
        XPathMessages::new(Arc::clone(&catalog), catalog)
    }

    #[test]
    fn show_prints_format_failure_text() {
        let messages = broken_catalog();
        let (text, problem) = render_show(&messages, "ER_BROKEN", &[&1], Header::Error);
        assert_eq!(text, "Exception thrown during messageFormat call broken {0");
        assert!(matches!(problem, Some(CatalogError::Format { .. })));
    }

    #[test]
    fn show_prints_key_when_nothing_defines_it() {
        let messages = broken_catalog();
        let (text, problem) = render_show(&messages, "ER_NOPE", &[&"a"], Header::Warning);
        assert_eq!(text, "ER_NOPE [a]");
        assert!(problem.is_some_and(|err| err.is_recoverable()));
    }

    #[test]
    fn show_adds_header() {
        let messages = broken_catalog();
        let (text, problem) = render_show(&messages, ER_UNKNOWN_AXIS, &[&"up"], Header::Error);
        assert_eq!(text, "Error: unknown axis: up");
        assert!(problem.is_none());
    }
}
