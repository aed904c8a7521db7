pub mod redact;
pub mod rules;
