//! The orchestrating gate: security, compliance, and semantic validation
//! composed into one pass/fail decision.
//!
//! Two evaluation modes with different contracts:
//! - [`SafeMigrationValidator::validate`] is the fast gate: stages run in
//!   order and the first failing stage short-circuits the rest.
//! - [`SafeMigrationValidator::detailed_validation`] always runs all three
//!   stages, so a caller sees every issue even after an early failure.

pub mod report;
pub mod signing;

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use codegate_core::{ConfigError, FileType, ValidationResult, ValidatorOptions};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::compliance::ComplianceVerifier;
use crate::parsers::SourceProject;
use crate::security::SecurityScanner;
use crate::semantic::SemanticValidator;

/// Outcome of the detailed-evaluation mode: one result per stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedValidation {
    pub security: ValidationResult,
    pub compliance: ValidationResult,
    pub semantic: ValidationResult,
    /// Conjunction of the three stage verdicts.
    pub success: bool,
}

impl DetailedValidation {
    /// All issues across stages, in stage order.
    pub fn all_issues(&self) -> impl Iterator<Item = &codegate_core::CodeIssue> {
        self.security
            .issues
            .iter()
            .chain(self.compliance.issues.iter())
            .chain(self.semantic.issues.iter())
    }
}

/// Detailed evaluation plus audit fields: a rendered report, the content
/// hash of the validated code, and the evaluation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub success: bool,
    pub report: String,
    /// SHA-256 of the input, hex-encoded. Always present, pass or fail.
    pub code_hash: String,
    /// RFC 3339 evaluation timestamp.
    pub timestamp: String,
    pub detailed: DetailedValidation,
}

/// The validation gate for machine-generated code changes.
///
/// Compliance and semantic stages share one [`SourceProject`], so a unit
/// parsed with a stable path is reused rather than reparsed.
pub struct SafeMigrationValidator {
    security: SecurityScanner,
    compliance: ComplianceVerifier,
    semantic: SemanticValidator,
}

impl SafeMigrationValidator {
    pub fn new(options: ValidatorOptions) -> Result<Self, ConfigError> {
        let project = Arc::new(SourceProject::new());
        Ok(Self {
            security: SecurityScanner::new(options.security)?,
            compliance: ComplianceVerifier::with_project(options.compliance, project.clone()),
            semantic: SemanticValidator::with_project(options.semantic, project)?,
        })
    }

    /// Validator with default configuration.
    pub fn with_defaults() -> Self {
        // Defaults carry no custom rules and the built-in safe-call
        // patterns, both covered by compile tests.
        match Self::new(ValidatorOptions::default()) {
            Ok(validator) => validator,
            Err(_) => unreachable!("default options are statically valid"),
        }
    }

    /// Fast gate: stages run security, compliance, semantic; the first
    /// failing stage short-circuits the rest.
    pub fn validate(&self, code: &str, file_type: FileType, file_path: Option<&str>) -> bool {
        let security = self.security.scan(code, file_type, file_path);
        if !security.success {
            tracing::info!(stage = "security", "validation gate rejected");
            return false;
        }
        let compliance = self.compliance.check(code, file_type, file_path);
        if !compliance.success {
            tracing::info!(stage = "compliance", "validation gate rejected");
            return false;
        }
        let semantic = self.semantic.verify(code, file_type, file_path);
        if !semantic.success {
            tracing::info!(stage = "semantic", "validation gate rejected");
            return false;
        }
        true
    }

    /// Detailed evaluation: all three stages always run.
    pub fn detailed_validation(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> DetailedValidation {
        let security = self.security.scan(code, file_type, file_path);
        let compliance = self.compliance.check(code, file_type, file_path);
        let semantic = self.semantic.verify(code, file_type, file_path);
        let success = security.success && compliance.success && semantic.success;
        DetailedValidation {
            security,
            compliance,
            semantic,
            success,
        }
    }

    /// Detailed evaluation plus audit fields. The content hash is computed
    /// whether or not validation passed.
    pub fn validation_report(
        &self,
        code: &str,
        file_type: FileType,
        file_path: Option<&str>,
    ) -> ValidationReport {
        let detailed = self.detailed_validation(code, file_type, file_path);
        let code_hash = content_hash(code);
        let timestamp = Utc::now().to_rfc3339();
        let report = report::render(&detailed, &code_hash, &timestamp);
        ValidationReport {
            success: detailed.success,
            report,
            code_hash,
            timestamp,
            detailed,
        }
    }

    /// Validate a file on disk through the fast gate.
    pub fn validate_path(&self, path: &Path) -> bool {
        match std::fs::read_to_string(path) {
            Ok(content) => self.validate(&content, FileType::from_path(path), path.to_str()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "file unreadable");
                false
            }
        }
    }

    /// One-shot convenience: default options, all three stages, TypeScript
    /// assumed. Useful for callers that just need a yes/no.
    pub fn validate_code(code: &str) -> bool {
        let validator = Self::with_defaults();
        validator
            .detailed_validation(code, FileType::Ts, None)
            .success
    }
}

/// Hex-encoded SHA-256 of the input text.
pub fn content_hash(code: &str) -> String {
    hex::encode(Sha256::digest(code.as_bytes()))
}
