//! Validation results — the outcome of one validator run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::file_type::FileType;
use crate::issue::CodeIssue;
use crate::severity::SeverityLevel;

/// Outcome of one validator run.
///
/// `issues` keeps detection order; severity sorting happens only at report
/// rendering. `success` is `false` iff `issues` contains at least one
/// `Error` or `Critical` entry — use [`ValidationResult::from_issues`] so
/// the invariant cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    pub issues: Vec<CodeIssue>,
    pub file_type: FileType,
    pub file_path: Option<String>,
    /// Free-form metadata: timestamps, applied-rule list, degradation notes.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl ValidationResult {
    /// Build a result from detected issues, computing `success` from the
    /// blocking-severity invariant.
    pub fn from_issues(
        issues: Vec<CodeIssue>,
        file_type: FileType,
        file_path: Option<String>,
    ) -> Self {
        let success = !issues.iter().any(|i| i.severity.is_blocking());
        Self {
            success,
            issues,
            file_type,
            file_path,
            metadata: Map::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Count issues at exactly the given severity.
    pub fn count_at(&self, severity: SeverityLevel) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
