// SPDX-License-Identifier: PMPL-1.0-or-later

//! Positional `{N}` substitution with `MessageFormat` quoting.
//!
//! Quoting rules:
//! - `''` is a literal apostrophe, inside or outside quoted text.
//! - `'...'` is quoted text; braces inside it are literal.
//! - An unterminated quote runs to the end of the template.
//!
//! `{N}` with `N` past the end of `args` is emitted unchanged. A format
//! suffix such as `{0,number}` is accepted and ignored; the argument is
//! rendered with its `Display` impl.
//!
//! Unlike Java's `MessageFormat`, an unquoted `}` outside a placeholder is
//! rejected rather than copied through; an unclosed `{` is rejected too.

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::{self, Write as _};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unmatched '{{' at byte {0}")]
    UnclosedBrace(usize),

    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),

    #[error("invalid argument index '{index}' at byte {offset}")]
    InvalidIndex { index: String, offset: usize },
}

/// Substitute `args` into `template`.
///
/// ```
/// use xpath_messages::i18n::format::format;
/// let out = format("Programmer''s assertion: {0}", &[&"bad opcode"]).unwrap();
/// assert_eq!(out, "Programmer's assertion: bad opcode");
/// ```
pub fn format(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();
    let mut quoted = false;

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            _ if quoted => out.push(ch),
            '{' => {
                let mut body = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(FormatError::UnclosedBrace(offset));
                }
                let index_text = body.split(',').next().unwrap_or_default().trim();
                let index: usize = index_text.parse().map_err(|_| FormatError::InvalidIndex {
                    index: index_text.to_string(),
                    offset,
                })?;
                match args.get(index) {
                    Some(arg) => {
                        // Writing into a String cannot fail.
                        let _ = write!(out, "{}", arg);
                    }
                    None => {
                        out.push('{');
                        out.push_str(&body);
                        out.push('}');
                    }
                }
            }
            '}' => return Err(FormatError::UnmatchedBrace(offset)),
            _ => out.push(ch),
        }
    }

    Ok(out)
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\s*(\d+)\s*(?:,[^}]*)?\}").expect("placeholder pattern is valid")
    })
}

/// Indices of every `{N}` placeholder in `template`.
///
/// Used to compare a translation against the base template, so quoting is
/// not interpreted here.
pub fn placeholders(template: &str) -> BTreeSet<usize> {
    placeholder_pattern()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_positional_arguments() {
        let out = format("Expected {0}, but found: {1}", &[&"]", &"EOF"]).unwrap();
        assert_eq!(out, "Expected ], but found: EOF");
    }

    #[test]
    fn arguments_may_repeat_and_reorder() {
        let out = format("\"{0}\":{1}#setFeature({0},{2})", &[&"f", &"Factory", &true]).unwrap();
        assert_eq!(out, "\"f\":Factory#setFeature(f,true)");
    }

    #[test]
    fn doubled_apostrophe_is_literal() {
        let out = format("The XPath expression ''{0}'' failed", &[&"//a"]).unwrap();
        assert_eq!(out, "The XPath expression '//a' failed");
    }

    #[test]
    fn quoted_text_keeps_braces() {
        let out = format("'{0}' is literal, {0} is not", &[&1]).unwrap();
        assert_eq!(out, "{0} is literal, 1 is not");
    }

    #[test]
    fn out_of_range_index_is_left_in_place() {
        let out = format("{0} and {3}", &[&"a"]).unwrap();
        assert_eq!(out, "a and {3}");
    }

    #[test]
    fn format_suffix_is_ignored() {
        let out = format("{0,number,integer} items", &[&42]).unwrap();
        assert_eq!(out, "42 items");
    }

    #[test]
    fn unbalanced_braces_are_errors() {
        assert_eq!(format("oops {0", &[&1]), Err(FormatError::UnclosedBrace(5)));
        assert_eq!(format("oops }", &[&1]), Err(FormatError::UnmatchedBrace(5)));
        // Quoting is the only way to emit a closing brace.
        assert_eq!(format("'}' {0}", &[&1]).unwrap(), "} 1");
        assert_eq!(
            format("{x}", &[&1]),
            Err(FormatError::InvalidIndex {
                index: "x".to_string(),
                offset: 0
            })
        );
    }

    #[test]
    fn placeholders_collects_indices() {
        let found = placeholders("{0}#isObjectModelSupported( {1} ) {0} {2,number}");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(placeholders("Empty expression!").is_empty());
    }
}
