//! Pattern-based redaction of sensitive substrings
//!
//! This crate contains:
//! - Rules (label + regex) and ordered rule sets
//! - The built-in rule table (EMAIL, IPV4, API_KEY, DB_URI)
//! - The redaction engine that rewrites text rule by rule

pub mod error;
pub mod redactor;
pub mod rule;

pub use error::{Result, SecurityError};
pub use redactor::{RedactionInfo, Redactor};
pub use rule::{Rule, RuleSet};
