//! codegate-core: shared vocabulary for the codegate validation engine.
//!
//! This crate carries everything the validators agree on:
//! - Severity: totally-ordered issue severity
//! - Issues: one detected problem with a stable rule id
//! - Results: per-validator outcome with the success invariant
//! - File types: the closed set of recognized input formats
//! - Config: option structs for each validator, TOML-loadable
//! - Errors: one `thiserror` enum per concern, zero `anyhow`

pub mod config;
pub mod errors;
pub mod file_type;
pub mod issue;
pub mod result;
pub mod severity;
pub mod trace;

// Re-exports for convenience
pub use config::{
    ComplianceOptions, CustomRule, DtoOptions, RuleFilter, SecurityScanOptions, SemanticOptions,
    Standard, ValidatorOptions,
};
pub use errors::{ConfigError, SignerError};
pub use file_type::FileType;
pub use issue::{CodeIssue, IssueCategory, Position};
pub use result::ValidationResult;
pub use severity::SeverityLevel;
