//! Semantic validator — AST heuristics over parsed source units.
//!
//! Five sub-checks run in a fixed order: parser diagnostics, Zod schema
//! rigor, DTO contracts, unused imports, error handling. All of them are
//! heuristics: they report likely problems, they do not prove absence.

pub mod dto;
pub mod error_handling;
pub mod imports;
pub mod type_check;
pub mod zod;

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use codegate_core::{
    CodeIssue, ConfigError, FileType, IssueCategory, SemanticOptions, SeverityLevel,
    ValidationResult,
};
use regex::Regex;

use crate::parsers::{ParsedUnit, SourceProject};
use crate::security::file_access_error;

/// AST-heuristic rule engine over TypeScript/JavaScript source.
///
/// Safe-call patterns compile at construction; a malformed pattern fails
/// fast rather than silently weakening the unguarded-await check.
pub struct SemanticValidator {
    options: SemanticOptions,
    safe_calls: Vec<Regex>,
    project: Arc<SourceProject>,
}

impl SemanticValidator {
    pub fn new(options: SemanticOptions) -> Result<Self, ConfigError> {
        Self::with_project(options, Arc::new(SourceProject::new()))
    }

    /// Share a source project with other validators.
    pub fn with_project(
        options: SemanticOptions,
        project: Arc<SourceProject>,
    ) -> Result<Self, ConfigError> {
        let mut safe_calls = Vec::with_capacity(options.safe_call_patterns.len());
        for pattern in &options.safe_call_patterns {
            let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidSafeCallPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            safe_calls.push(regex);
        }
        Ok(Self {
            options,
            safe_calls,
            project,
        })
    }

    /// Validator with default configuration.
    pub fn with_defaults() -> Self {
        // Default safe-call patterns are covered by a compile test; with
        // them construction cannot fail.
        match Self::new(SemanticOptions::default()) {
            Ok(validator) => validator,
            Err(_) => unreachable!("default safe-call patterns are valid"),
        }
    }

    /// Verify in-memory source text.
    pub fn verify(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> ValidationResult {
        if !file_type.is_source() {
            let path = file_path.map(str::to_string);
            return ValidationResult::from_issues(Vec::new(), file_type, path)
                .with_metadata(
                    "note",
                    format!("File type '{file_type}' does not support semantic validation"),
                )
                .with_metadata("verified_at", Utc::now().to_rfc3339());
        }

        let issues = self
            .project
            .with_unit(code, file_type, file_path, |unit| match unit {
                Some(unit) => self.run_checks(unit),
                None => vec![CodeIssue::new(
                    SeverityLevel::Error,
                    IssueCategory::Semantic,
                    "typescript-type-check",
                    "Source could not be parsed",
                )],
            });

        tracing::debug!(
            issues = issues.len(),
            file_type = %file_type,
            "semantic verification complete"
        );

        ValidationResult::from_issues(issues, file_type, file_path.map(str::to_string))
            .with_metadata("verified_at", Utc::now().to_rfc3339())
    }

    /// Verify a file on disk. I/O failure becomes a synthetic issue.
    pub fn verify_path(&self, path: &Path) -> ValidationResult {
        match std::fs::read_to_string(path) {
            Ok(content) => self.verify(&content, FileType::from_path(path), path.to_str()),
            Err(e) => file_access_error(path, &e),
        }
    }

    fn run_checks(&self, unit: &ParsedUnit) -> Vec<CodeIssue> {
        let mut issues = Vec::new();
        if self.options.type_check {
            issues.extend(type_check::check(unit));
        }
        if self.options.validate_zod_schemas {
            issues.extend(zod::check(unit));
        }
        issues.extend(dto::check(unit, &self.options.validate_dtos));
        issues.extend(imports::check(unit));
        issues.extend(error_handling::check(unit, &self.safe_calls));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_safe_call_patterns_compile() {
        for pattern in SemanticOptions::default_safe_call_patterns() {
            assert!(Regex::new(&pattern).is_ok(), "pattern '{pattern}' rejected");
        }
    }

    #[test]
    fn malformed_safe_call_pattern_fails_construction() {
        let options = SemanticOptions {
            safe_call_patterns: vec!["[unclosed".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            SemanticValidator::new(options),
            Err(ConfigError::InvalidSafeCallPattern { .. })
        ));
    }

    #[test]
    fn non_source_types_are_skipped_with_a_note() {
        let validator = SemanticValidator::with_defaults();
        let result = validator.verify("key: value", FileType::Yaml, None);
        assert!(result.success);
        assert!(result.issues.is_empty());
        assert!(result.metadata.contains_key("note"));
    }
}
