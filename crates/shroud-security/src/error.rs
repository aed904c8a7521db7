//! Error types for shroud-security

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SecurityError>;

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Invalid rule label: {0:?} (expected an uppercase identifier)")]
    InvalidLabel(String),

    #[error("Duplicate rule label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid pattern for rule {label}: {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}
