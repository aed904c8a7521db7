//! Detection rules and ordered rule sets

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SecurityError};

/// Email addresses: `local-part@domain.tld`
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Four dot-separated groups of 1-3 digits. Octet values are not range-checked.
pub const IPV4_PATTERN: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";

/// Key name, separator, optional quote, 20+ char value, optional quote
pub const API_KEY_PATTERN: &str =
    r#"(?i)(api[-_]?key|secret|token)\s*[:=]\s*['"]?([a-zA-Z0-9_\-]{20,})['"]?"#;

/// Database connection strings, up to the next whitespace
pub const DB_URI_PATTERN: &str = r"(postgresql|mysql|mongodb)://\S+";

lazy_static! {
    static ref BUILTIN_RULES: RuleSet = {
        let rules: Vec<Rule> = [
            ("EMAIL", EMAIL_PATTERN),
            ("IPV4", IPV4_PATTERN),
            ("API_KEY", API_KEY_PATTERN),
            ("DB_URI", DB_URI_PATTERN),
        ]
        .into_iter()
        .map(|(label, pattern)| Rule::new(label, pattern).expect("built-in rule must compile"))
        .collect();

        RuleSet::new(rules).expect("built-in labels are unique")
    };
}

/// A named detection pattern
#[derive(Debug, Clone)]
pub struct Rule {
    label: String,
    regex: Regex,
}

impl Rule {
    /// Compile a rule. The label must be an uppercase identifier.
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let label = label.into();
        if !is_valid_label(&label) {
            return Err(SecurityError::InvalidLabel(label));
        }

        let regex = Regex::new(pattern).map_err(|source| SecurityError::InvalidPattern {
            label: label.clone(),
            source,
        })?;

        Ok(Self { label, regex })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Replacement text inserted for every match, e.g. `<EMAIL_REDACTED>`
    pub fn placeholder(&self) -> String {
        format!("<{}_REDACTED>", self.label)
    }
}

fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Ordered, immutable collection of rules. Order is application order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.label()) {
                return Err(SecurityError::DuplicateLabel(rule.label().to_string()));
            }
        }

        Ok(Self { rules })
    }

    /// The reference table: EMAIL, IPV4, API_KEY, DB_URI
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::label).collect()
    }

    pub fn get(&self, label: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.label() == label)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
