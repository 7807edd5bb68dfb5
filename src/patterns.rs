//! Document-name glob patterns, as used by the sidebar layout and the exclusion list.
//!
//! The dialect:
//! - `**` matches any sequence of characters, including `/`,
//! - `*` matches any sequence of characters except `/`,
//! - `?` matches one character except `/`,
//! - `[...]` is a character class and `[!...]` its negation,
//! - everything else matches literally.
//!
//! Patterns are always matched against the whole document name.

use indexmap::IndexMap;
use miette::{miette, Context, IntoDiagnostic, Result};
use regex::Regex;
use tracing::warn;


/// A single compiled document-name pattern.
#[derive(Clone, Debug)]
pub struct DocumentPattern {
    pattern: String,
    regex: Regex,
}

impl DocumentPattern {
    pub fn new<S>(pattern: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let pattern: String = pattern.into();

        let regex = Regex::new(&translate_pattern(&pattern))
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to compile document pattern {}.", pattern))?;

        Ok(Self { pattern, regex })
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn has_wildcard(&self) -> bool {
        has_wildcard(&self.pattern)
    }

    pub fn matches(&self, document_name: &str) -> bool {
        self.regex.is_match(&normalize_separators(document_name))
    }
}


/// Returns `true` if the pattern contains any character with a special meaning.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn normalize_separators(document_name: &str) -> String {
    document_name.replace('\\', "/")
}

/// Translates a document pattern into an anchored regular expression.
fn translate_pattern(pattern: &str) -> String {
    let characters: Vec<char> = pattern.chars().collect();
    let mut expression = String::with_capacity(pattern.len() * 2 + 2);
    expression.push('^');

    let mut index = 0;
    while index < characters.len() {
        let character = characters[index];
        index += 1;

        match character {
            '*' => {
                if characters.get(index) == Some(&'*') {
                    index += 1;
                    expression.push_str(".*");
                } else {
                    expression.push_str("[^/]*");
                }
            }
            '?' => expression.push_str("[^/]"),
            '[' => {
                // Find the closing bracket; a leading `!` or `]` belongs to the class.
                let mut closing = index;
                if characters.get(closing) == Some(&'!') {
                    closing += 1;
                }
                if characters.get(closing) == Some(&']') {
                    closing += 1;
                }
                while closing < characters.len() && characters[closing] != ']' {
                    closing += 1;
                }

                if closing >= characters.len() {
                    expression.push_str(r"\[");
                    continue;
                }

                let class: String = characters[index..closing].iter().collect();
                index = closing + 1;

                let (negated, members) = match class.strip_prefix('!') {
                    Some(rest) => (true, rest),
                    None => (false, class.as_str()),
                };

                // Escape everything except the range hyphen.
                let members = members
                    .replace('\\', r"\\")
                    .replace('[', r"\[")
                    .replace(']', r"\]")
                    .replace('^', r"\^")
                    .replace('&', r"\&")
                    .replace('~', r"\~");

                if negated {
                    // Negated classes never match the path separator.
                    expression.push_str(&format!("[^/{members}]"));
                } else {
                    expression.push_str(&format!("[{members}]"));
                }
            }
            other => expression.push_str(&regex::escape(&other.to_string())),
        }
    }

    expression.push('$');
    expression
}


/// Compiled sidebar layout: document-name patterns mapped to sidebar widget names.
#[derive(Clone, Debug, Default)]
pub struct SidebarMatcher {
    entries: Vec<(DocumentPattern, Vec<String>)>,
}

impl SidebarMatcher {
    pub fn new(layout: &IndexMap<String, Vec<String>>) -> Result<Self> {
        let entries = layout
            .iter()
            .map(|(pattern, widgets)| Ok((DocumentPattern::new(pattern.as_str())?, widgets.clone())))
            .collect::<Result<Vec<_>>>()
            .wrap_err("Failed to compile sidebar layout patterns.")?;

        Ok(Self { entries })
    }

    /// Selects the sidebar widgets for `document_name`.
    ///
    /// A matching pattern without wildcards always wins. Otherwise the first matching
    /// wildcard pattern, in the order the layout was written, is used; further wildcard matches are reported
    /// as ambiguous.
    pub fn widgets_for(&self, document_name: &str) -> Option<&[String]> {
        let mut selected: Option<&(DocumentPattern, Vec<String>)> = None;

        for entry in &self.entries {
            let (pattern, _) = entry;
            if !pattern.matches(document_name) {
                continue;
            }

            if let Some((selected_pattern, _)) = selected {
                if pattern.has_wildcard() {
                    if selected_pattern.has_wildcard() {
                        warn!(
                            document = document_name,
                            selected = selected_pattern.as_str(),
                            ignored = pattern.as_str(),
                            "Document matches more than one sidebar pattern."
                        );
                    }

                    continue;
                }
            }

            selected = Some(entry);
        }

        selected.map(|(_, widgets)| widgets.as_slice())
    }
}


/// Compiled exclusion list.
#[derive(Clone, Debug, Default)]
pub struct ExclusionMatcher {
    patterns: Vec<DocumentPattern>,
}

impl ExclusionMatcher {
    pub fn new<'a, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| DocumentPattern::new(pattern.as_str()))
            .collect::<Result<Vec<_>>>()
            .wrap_err("Failed to compile exclusion patterns.")?;

        Ok(Self { patterns })
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}
